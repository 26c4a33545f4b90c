use super::role::Role;
use crate::color::Argb;
use crate::hct::GamutMappingFailure;
use crate::palette::{CorePalette, SchemeVariant, TonalPalette};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

/// Palette and tone a role takes in the given appearance.
fn role_tone(role: Role, appearance: Appearance, variant: SchemeVariant) -> (Source, u8) {
    use Role::*;

    let dark = appearance.is_dark();
    let pick = |light: u8, dark_tone: u8| if dark { dark_tone } else { light };

    match role {
        Primary => (Source::Primary, pick(40, 80)),
        OnPrimary => (Source::Primary, pick(100, 20)),
        PrimaryContainer => (Source::Primary, pick(90, 30)),
        OnPrimaryContainer => (Source::Primary, pick(10, 90)),
        Secondary => (Source::Secondary, pick(40, 80)),
        OnSecondary => (Source::Secondary, pick(100, 20)),
        SecondaryContainer => (Source::Secondary, pick(90, 30)),
        OnSecondaryContainer => (Source::Secondary, pick(10, 90)),
        Tertiary => (Source::Tertiary, pick(40, 80)),
        OnTertiary => (Source::Tertiary, pick(100, 20)),
        TertiaryContainer => (Source::Tertiary, pick(90, 30)),
        OnTertiaryContainer => (Source::Tertiary, pick(10, 90)),
        Error => (Source::Error, pick(40, 80)),
        OnError => (Source::Error, pick(100, 20)),
        ErrorContainer => (Source::Error, pick(90, 30)),
        OnErrorContainer => (Source::Error, pick(10, 80)),
        Background | Surface if variant.has_dynamic_surfaces() => {
            (Source::Neutral, pick(98, 6))
        }
        Background | Surface => (Source::Neutral, pick(99, 10)),
        OnBackground | OnSurface => (Source::Neutral, pick(10, 90)),
        SurfaceVariant => (Source::NeutralVariant, pick(90, 30)),
        OnSurfaceVariant => (Source::NeutralVariant, pick(30, 80)),
        Outline => (Source::NeutralVariant, pick(50, 60)),
        OutlineVariant => (Source::NeutralVariant, pick(80, 30)),
        Shadow | Scrim => (Source::Neutral, 0),
        InverseSurface => (Source::Neutral, pick(20, 90)),
        InverseOnSurface => (Source::Neutral, pick(95, 20)),
        InversePrimary => (Source::Primary, pick(80, 40)),
    }
}

fn palette_for(core: &CorePalette, source: Source) -> &TonalPalette {
    match source {
        Source::Primary => &core.primary,
        Source::Secondary => &core.secondary,
        Source::Tertiary => &core.tertiary,
        Source::Neutral => &core.neutral,
        Source::NeutralVariant => &core.neutral_variant,
        Source::Error => &core.error,
    }
}

/// A color for every [`Role`] in one appearance.
///
/// # Example
///
/// ```
/// use hct_scheme::scheme::{Role, Scheme};
/// use hct_scheme::Argb;
///
/// let scheme = Scheme::light(Argb::new(0xff4285f4)).unwrap();
/// assert_eq!(scheme.iter().count(), Role::COUNT);
/// assert_eq!(scheme.get(Role::OnPrimary).to_hex(), "#ffffff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme {
    appearance: Appearance,
    colors: [Argb; Role::COUNT],
}

impl Scheme {
    /// Assign every role its tone from `core`.
    pub fn from_core_palette(
        core: &CorePalette,
        appearance: Appearance,
        variant: SchemeVariant,
    ) -> Self {
        let colors = Role::ALL.map(|role| {
            let (source, tone) = role_tone(role, appearance, variant);
            palette_for(core, source).tone(tone)
        });
        Self { appearance, colors }
    }

    /// Classic light scheme for `source`.
    pub fn light(source: Argb) -> Result<Self, GamutMappingFailure> {
        let core = CorePalette::new(source, SchemeVariant::Classic)?;
        Ok(Self::from_core_palette(
            &core,
            Appearance::Light,
            SchemeVariant::Classic,
        ))
    }

    /// Classic dark scheme for `source`.
    pub fn dark(source: Argb) -> Result<Self, GamutMappingFailure> {
        let core = CorePalette::new(source, SchemeVariant::Classic)?;
        Ok(Self::from_core_palette(
            &core,
            Appearance::Dark,
            SchemeVariant::Classic,
        ))
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    #[inline]
    pub fn get(&self, role: Role) -> Argb {
        self.colors[role.index()]
    }

    /// `(role, color)` in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Argb)> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

/// Light and dark schemes from one source color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemePair {
    pub source: Argb,
    pub light: Scheme,
    pub dark: Scheme,
}

impl SchemePair {
    /// Build both appearances from a single core palette.
    pub fn new(source: Argb, variant: SchemeVariant) -> Result<Self, GamutMappingFailure> {
        let core = CorePalette::new(source, variant)?;
        Ok(Self::from_core_palette(source, &core, variant))
    }

    pub fn from_core_palette(source: Argb, core: &CorePalette, variant: SchemeVariant) -> Self {
        Self {
            source,
            light: Scheme::from_core_palette(core, Appearance::Light, variant),
            dark: Scheme::from_core_palette(core, Appearance::Dark, variant),
        }
    }

    pub fn get(&self, appearance: Appearance) -> &Scheme {
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

    const GOOGLE_BLUE: Argb = Argb::new(0xff4285f4);

    fn tone(argb: Argb) -> f64 {
        lstar_from_argb(argb)
    }

    #[test]
    fn test_light_tones() {
        let scheme = Scheme::light(GOOGLE_BLUE).unwrap();
        assert_eq!(scheme.appearance(), Appearance::Light);
        assert!((tone(scheme.get(Role::Primary)) - 40.0).abs() <= 0.5);
        assert!((tone(scheme.get(Role::PrimaryContainer)) - 90.0).abs() <= 0.5);
        assert!((tone(scheme.get(Role::Background)) - 99.0).abs() <= 0.5);
        assert!((tone(scheme.get(Role::Outline)) - 50.0).abs() <= 0.5);
        assert_eq!(scheme.get(Role::OnPrimary), Argb::new(0xffffffff));
        assert_eq!(scheme.get(Role::Shadow), Argb::new(0xff000000));
        assert_eq!(scheme.get(Role::Scrim), Argb::new(0xff000000));
    }

    #[test]
    fn test_dark_tones() {
        let scheme = Scheme::dark(GOOGLE_BLUE).unwrap();
        assert_eq!(scheme.appearance(), Appearance::Dark);
        assert!((tone(scheme.get(Role::Primary)) - 80.0).abs() <= 0.5);
        assert!((tone(scheme.get(Role::OnPrimary)) - 20.0).abs() <= 0.5);
        assert!((tone(scheme.get(Role::OnErrorContainer)) - 80.0).abs() <= 0.5);
        assert!((tone(scheme.get(Role::Surface)) - 10.0).abs() <= 0.5);
        assert!((tone(scheme.get(Role::InversePrimary)) - 40.0).abs() <= 0.5);
    }

    #[test]
    fn test_dark_on_error_container_is_error_80() {
        let source = Argb::new(0xff6750a4);
        let core = CorePalette::new(source, SchemeVariant::Classic).unwrap();
        let scheme = Scheme::dark(source).unwrap();
        assert_eq!(scheme.get(Role::OnErrorContainer), core.error.tone(80));
        assert_eq!(scheme.get(Role::OnErrorContainer).to_hex(), "#ffb4ab");
        assert_eq!(scheme.get(Role::OnErrorContainer), scheme.get(Role::Error));
    }

    #[test]
    fn test_tonal_spot_surfaces() {
        let pair = SchemePair::new(GOOGLE_BLUE, SchemeVariant::TonalSpot).unwrap();
        assert!((tone(pair.light.get(Role::Background)) - 98.0).abs() <= 0.5);
        assert!((tone(pair.dark.get(Role::Surface)) - 6.0).abs() <= 0.5);
    }

    #[test]
    fn test_every_variant_builds_full_pair() {
        for variant in SchemeVariant::ALL {
            let pair = SchemePair::new(GOOGLE_BLUE, variant).unwrap();
            let (light_bg, dark_bg) = if variant.has_dynamic_surfaces() {
                (98.0, 6.0)
            } else {
                (99.0, 10.0)
            };
            assert!((tone(pair.light.get(Role::Surface)) - light_bg).abs() <= 0.5);
            assert!((tone(pair.dark.get(Role::Background)) - dark_bg).abs() <= 0.5);
            assert!((tone(pair.light.get(Role::Primary)) - 40.0).abs() <= 0.5);
            assert!((tone(pair.dark.get(Role::OnPrimary)) - 20.0).abs() <= 0.5);
        }
    }

    #[test]
    fn test_pair_matches_single_schemes() {
        let pair = SchemePair::new(GOOGLE_BLUE, SchemeVariant::Classic).unwrap();
        assert_eq!(pair.source, GOOGLE_BLUE);
        assert_eq!(pair.light, Scheme::light(GOOGLE_BLUE).unwrap());
        assert_eq!(pair.dark, Scheme::dark(GOOGLE_BLUE).unwrap());
        assert_eq!(pair.get(Appearance::Dark), &pair.dark);
    }

    #[test]
    fn test_iter_covers_every_role() {
        let scheme = Scheme::light(GOOGLE_BLUE).unwrap();
        let roles: Vec<Role> = scheme.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_error_palette_is_source_independent() {
        let a = Scheme::light(Argb::new(0xff00ff00)).unwrap();
        let b = Scheme::light(Argb::new(0xff0000ff)).unwrap();
        assert_eq!(a.get(Role::Error), b.get(Role::Error));
        assert_eq!(a.get(Role::ErrorContainer), b.get(Role::ErrorContainer));
    }
}
