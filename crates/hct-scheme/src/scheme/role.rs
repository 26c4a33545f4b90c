use std::fmt;
use std::str::FromStr;

/// A named color slot in a UI scheme.
///
/// The set is closed: every [`Scheme`](super::Scheme) assigns a color to
/// each of these, and [`Role::ALL`] lists them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,
}

impl Role {
    pub const COUNT: usize = 29;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
        Role::Background,
        Role::OnBackground,
        Role::Surface,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::Outline,
        Role::OutlineVariant,
        Role::Shadow,
        Role::Scrim,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::InversePrimary,
    ];

    /// Position in [`Role::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name, as used in serialized schemes.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::OnPrimary => "on_primary",
            Role::PrimaryContainer => "primary_container",
            Role::OnPrimaryContainer => "on_primary_container",
            Role::Secondary => "secondary",
            Role::OnSecondary => "on_secondary",
            Role::SecondaryContainer => "secondary_container",
            Role::OnSecondaryContainer => "on_secondary_container",
            Role::Tertiary => "tertiary",
            Role::OnTertiary => "on_tertiary",
            Role::TertiaryContainer => "tertiary_container",
            Role::OnTertiaryContainer => "on_tertiary_container",
            Role::Error => "error",
            Role::OnError => "on_error",
            Role::ErrorContainer => "error_container",
            Role::OnErrorContainer => "on_error_container",
            Role::Background => "background",
            Role::OnBackground => "on_background",
            Role::Surface => "surface",
            Role::OnSurface => "on_surface",
            Role::SurfaceVariant => "surface_variant",
            Role::OnSurfaceVariant => "on_surface_variant",
            Role::Outline => "outline",
            Role::OutlineVariant => "outline_variant",
            Role::Shadow => "shadow",
            Role::Scrim => "scrim",
            Role::InverseSurface => "inverse_surface",
            Role::InverseOnSurface => "inverse_on_surface",
            Role::InversePrimary => "inverse_primary",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheme role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
