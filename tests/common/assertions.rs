//! Assertion helpers for tests.

use hct_scheme::color::lstar_from_argb;
use hct_scheme::{Argb, Role, Scheme};
use pretty_assertions::assert_eq;
use wallhue::SchemeSet;

/// Assert a color's L* is within half a tone of `expected`
pub fn assert_tone(color: Argb, expected: f64) {
    let tone = lstar_from_argb(color);
    assert!(
        (tone - expected).abs() <= 0.5,
        "Expected tone {expected}, {color} has L* {tone:.3}"
    );
}

/// Assert every role has an opaque color
pub fn assert_complete(scheme: &Scheme) {
    let roles: Vec<Role> = scheme.iter().map(|(role, _)| role).collect();
    assert_eq!(roles, Role::ALL.to_vec());
    for (role, color) in scheme.iter() {
        assert_eq!(color.alpha(), 0xff, "{role} is not opaque");
    }
}

/// Assert the serialized form of a scheme set has every role in both
/// appearances, as lowercase `#rrggbb`
pub fn assert_valid_json(set: &SchemeSet) {
    let json: serde_json::Value = serde_json::to_value(set).expect("SchemeSet serializes");
    let source = json["source"].as_str().expect("source is a string");
    assert_hex(source);

    let colors = json["colors"].as_object().expect("colors is an object");
    assert_eq!(colors.len(), Role::COUNT);
    for role in Role::ALL {
        let entry = &colors[role.name()];
        for mode in ["light", "dark"] {
            let hex = entry[mode]
                .as_str()
                .unwrap_or_else(|| panic!("{role}.{mode} missing. Full JSON: {json}"));
            assert_hex(hex);
        }
    }
}

fn assert_hex(value: &str) {
    assert!(
        value.len() == 7
            && value.starts_with('#')
            && value[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase #rrggbb, got {value:?}"
    );
}
