//! Role-by-role comparison against reference schemes
//!
//! A reference is anything that can produce a [`SchemePair`] for an image:
//! a fixed pair captured earlier, or a closure wrapping some other
//! implementation. Formatting the result is left to the caller.

use hct_scheme::{Appearance, Argb, PixelLayout, Role, SchemePair};
use std::fmt;
use thiserror::Error;

/// A decoded image handed to a reference provider
#[derive(Debug, Clone, Copy)]
pub struct ImageRef<'a> {
    /// Caller-chosen label, e.g. a file name
    pub name: &'a str,
    pub bytes: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub layout: PixelLayout,
}

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Reference unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid reference output: {0}")]
    Invalid(String),
}

/// A source of reference scheme pairs
pub trait ReferenceSchemes {
    fn reference(&self, image: &ImageRef<'_>) -> Result<SchemePair, ReferenceError>;
}

/// A fixed pair is its own reference for every image
impl ReferenceSchemes for SchemePair {
    fn reference(&self, _image: &ImageRef<'_>) -> Result<SchemePair, ReferenceError> {
        Ok(self.clone())
    }
}

impl<F> ReferenceSchemes for F
where
    F: Fn(&ImageRef<'_>) -> Result<SchemePair, ReferenceError>,
{
    fn reference(&self, image: &ImageRef<'_>) -> Result<SchemePair, ReferenceError> {
        self(image)
    }
}

/// One role whose colors differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMismatch {
    pub role: Role,
    pub appearance: Appearance,
    pub ours: Argb,
    pub reference: Argb,
}

impl fmt::Display for RoleMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.appearance.is_dark() { "dark" } else { "light" };
        write!(
            f,
            "{} ({}): {} vs {}",
            self.role, mode, self.ours, self.reference
        )
    }
}

/// Result of comparing two scheme pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    ours_source: Argb,
    reference_source: Argb,
    checked: usize,
    mismatches: Vec<RoleMismatch>,
}

impl Comparison {
    /// Differing roles, light before dark, each in role order
    pub fn mismatches(&self) -> &[RoleMismatch] {
        &self.mismatches
    }

    /// Every compared role matched in both appearances
    pub fn is_identical(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn source_matches(&self) -> bool {
        self.ours_source == self.reference_source
    }

    pub fn ours_source(&self) -> Argb {
        self.ours_source
    }

    pub fn reference_source(&self) -> Argb {
        self.reference_source
    }

    /// Number of (role, appearance) pairs compared
    pub fn checked(&self) -> usize {
        self.checked
    }
}

/// Compare every role in both appearances
pub fn compare(ours: &SchemePair, reference: &SchemePair) -> Comparison {
    compare_roles(ours, reference, &Role::ALL)
}

/// Compare only `roles` in both appearances
pub fn compare_roles(ours: &SchemePair, reference: &SchemePair, roles: &[Role]) -> Comparison {
    let mut mismatches = Vec::new();
    for appearance in [Appearance::Light, Appearance::Dark] {
        let (a, b) = (ours.get(appearance), reference.get(appearance));
        for &role in roles {
            if a.get(role) != b.get(role) {
                mismatches.push(RoleMismatch {
                    role,
                    appearance,
                    ours: a.get(role),
                    reference: b.get(role),
                });
            }
        }
    }

    Comparison {
        ours_source: ours.source,
        reference_source: reference.source,
        checked: roles.len() * 2,
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hct_scheme::SchemeVariant;

    fn pair(source: u32, variant: SchemeVariant) -> SchemePair {
        SchemePair::new(Argb::new(source), variant).unwrap()
    }

    fn image() -> ImageRef<'static> {
        ImageRef {
            name: "test",
            bytes: &[0, 0, 0],
            width: 1,
            height: 1,
            layout: PixelLayout::Rgb,
        }
    }

    #[test]
    fn test_identical_pairs() {
        let a = pair(0xff4285f4, SchemeVariant::Classic);
        let comparison = compare(&a, &a.clone());
        assert!(comparison.is_identical());
        assert!(comparison.source_matches());
        assert_eq!(comparison.checked(), Role::COUNT * 2);
    }

    #[test]
    fn test_variant_difference_is_reported() {
        let ours = pair(0xff4285f4, SchemeVariant::Classic);
        let reference = pair(0xff4285f4, SchemeVariant::TonalSpot);
        let comparison = compare(&ours, &reference);

        assert!(!comparison.is_identical());
        assert!(comparison.source_matches());
        // Error palette does not depend on the variant
        assert!(comparison
            .mismatches()
            .iter()
            .all(|m| m.role != Role::Error && m.role != Role::OnError));
        // Surfaces move from N99 to N98
        assert!(comparison
            .mismatches()
            .iter()
            .any(|m| m.role == Role::Surface && m.appearance == Appearance::Light));
    }

    #[test]
    fn test_compare_subset_of_roles() {
        let ours = pair(0xff4285f4, SchemeVariant::Classic);
        let reference = pair(0xffff0000, SchemeVariant::Classic);
        let comparison = compare_roles(&ours, &reference, &[Role::Error, Role::Shadow]);
        assert!(comparison.is_identical());
        assert!(!comparison.source_matches());
        assert_eq!(comparison.checked(), 4);
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = RoleMismatch {
            role: Role::OnPrimary,
            appearance: Appearance::Dark,
            ours: Argb::new(0xff102030),
            reference: Argb::new(0xff112233),
        };
        assert_eq!(mismatch.to_string(), "on_primary (dark): #102030 vs #112233");
    }

    #[test]
    fn test_fixed_pair_reference() {
        let fixed = pair(0xff00ff00, SchemeVariant::Content);
        assert_eq!(fixed.reference(&image()).unwrap(), fixed);
    }

    #[test]
    fn test_closure_reference() {
        let provider = |image: &ImageRef<'_>| -> Result<SchemePair, ReferenceError> {
            if image.name == "missing" {
                return Err(ReferenceError::Unavailable(image.name.to_string()));
            }
            SchemePair::new(Argb::new(0xffff0000), SchemeVariant::Classic)
                .map_err(|e| ReferenceError::Invalid(e.to_string()))
        };

        assert!(provider.reference(&image()).is_ok());
        let missing = ImageRef {
            name: "missing",
            ..image()
        };
        let err = provider.reference(&missing).unwrap_err();
        assert_eq!(err.to_string(), "Reference unavailable: missing");
    }
}
