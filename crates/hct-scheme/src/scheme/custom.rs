//! Custom colors
//!
//! Brand or status colors that live next to a scheme. Each one gets its
//! own tonal palette and the same four roles as the accent colors, named
//! after the color: `<name>`, `on_<name>`, `<name>_container` and
//! `on_<name>_container`.

use super::scheme::Appearance;
use crate::blend::harmonize;
use crate::color::Argb;
use crate::hct::GamutMappingFailure;
use crate::palette::TonalPalette;

/// A named color to carry into a theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomColor {
    pub name: String,
    pub value: Argb,
    /// Turn the hue toward the source color before building the palette.
    pub blend: bool,
}

impl CustomColor {
    pub fn new(name: impl Into<String>, value: Argb) -> Self {
        Self {
            name: name.into(),
            value,
            blend: true,
        }
    }

    #[inline]
    pub fn blend(mut self, blend: bool) -> Self {
        self.blend = blend;
        self
    }
}

/// The four roles of one custom color in one appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorGroup {
    pub color: Argb,
    pub on_color: Argb,
    pub color_container: Argb,
    pub on_color_container: Argb,
}

impl ColorGroup {
    fn from_palette(palette: &TonalPalette, appearance: Appearance) -> Self {
        let [color, on_color, color_container, on_color_container] = match appearance {
            Appearance::Light => [40, 100, 90, 10],
            Appearance::Dark => [80, 20, 30, 90],
        };
        Self {
            color: palette.tone(color),
            on_color: palette.tone(on_color),
            color_container: palette.tone(color_container),
            on_color_container: palette.tone(on_color_container),
        }
    }

    /// `(role name, color)` pairs, named after `name`.
    pub fn named(&self, name: &str) -> [(String, Argb); 4] {
        [
            (name.to_string(), self.color),
            (format!("on_{name}"), self.on_color),
            (format!("{name}_container"), self.color_container),
            (format!("on_{name}_container"), self.on_color_container),
        ]
    }
}

/// A custom color resolved against a source color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomColorGroup {
    pub color: CustomColor,
    /// The color the palette was built from, after harmonizing.
    pub value: Argb,
    pub light: ColorGroup,
    pub dark: ColorGroup,
}

impl CustomColorGroup {
    pub fn new(source: Argb, color: CustomColor) -> Result<Self, GamutMappingFailure> {
        let value = if color.blend {
            harmonize(color.value, source)?
        } else {
            color.value.opaque()
        };
        let palette = TonalPalette::from_argb(value)?;
        Ok(Self {
            light: ColorGroup::from_palette(&palette, Appearance::Light),
            dark: ColorGroup::from_palette(&palette, Appearance::Dark),
            color,
            value,
        })
    }

    pub fn get(&self, appearance: Appearance) -> &ColorGroup {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::lstar_from_argb;

    const BLUE: Argb = Argb::new(0xff0000ff);
    const RED: Argb = Argb::new(0xffff0000);

    #[test]
    fn test_blended_value_is_harmonized() {
        let group = CustomColorGroup::new(BLUE, CustomColor::new("brand", RED)).unwrap();
        assert_eq!(group.value, Argb::new(0xfffb0057));
        assert_eq!(group.color.value, RED);
    }

    #[test]
    fn test_unblended_value_kept() {
        let color = CustomColor::new("brand", RED).blend(false);
        let group = CustomColorGroup::new(BLUE, color).unwrap();
        assert_eq!(group.value, RED);
    }

    #[test]
    fn test_group_tones() {
        let group = CustomColorGroup::new(BLUE, CustomColor::new("warning", RED)).unwrap();
        let tone = |argb: Argb| lstar_from_argb(argb);
        assert!((tone(group.light.color) - 40.0).abs() <= 0.5);
        assert_eq!(group.light.on_color, Argb::new(0xffffffff));
        assert!((tone(group.light.color_container) - 90.0).abs() <= 0.5);
        assert!((tone(group.dark.color) - 80.0).abs() <= 0.5);
        assert!((tone(group.dark.on_color_container) - 90.0).abs() <= 0.5);
        assert_eq!(group.get(Appearance::Dark), &group.dark);
    }

    #[test]
    fn test_role_names() {
        let group = CustomColorGroup::new(BLUE, CustomColor::new("brand", RED)).unwrap();
        let names: Vec<String> = group
            .light
            .named("brand")
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            ["brand", "on_brand", "brand_container", "on_brand_container"]
        );
    }
}
