use hct_scheme::{Appearance, Argb, CustomColorGroup, Extraction, Role, SchemePair};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Light and dark schemes in their serialized form
///
/// Serializes as:
///
/// ```json
/// {
///   "source": "#rrggbb",
///   "colors": {
///     "primary": { "light": "#rrggbb", "dark": "#rrggbb" },
///     ...
///   },
///   "custom": {
///     "brand": { "light": "#rrggbb", "dark": "#rrggbb" },
///     "on_brand": { ... },
///     ...
///   }
/// }
/// ```
///
/// Roles appear in their declaration order and colors as lowercase hex.
/// `custom` is present only when custom colors were configured, with each
/// color's four roles in config order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeSet {
    pair: SchemePair,
    custom: Vec<CustomColorGroup>,
}

impl SchemeSet {
    pub fn new(pair: SchemePair) -> Self {
        Self {
            pair,
            custom: Vec::new(),
        }
    }

    pub fn with_custom_colors(mut self, custom: Vec<CustomColorGroup>) -> Self {
        self.custom = custom;
        self
    }

    pub fn custom_colors(&self) -> &[CustomColorGroup] {
        &self.custom
    }

    pub fn pair(&self) -> &SchemePair {
        &self.pair
    }

    pub fn source(&self) -> Argb {
        self.pair.source
    }

    /// `(light, dark)` colors of one role
    pub fn get(&self, role: Role) -> (Argb, Argb) {
        (self.pair.light.get(role), self.pair.dark.get(role))
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<SchemePair> for SchemeSet {
    fn from(pair: SchemePair) -> Self {
        Self::new(pair)
    }
}

impl From<Extraction> for SchemeSet {
    fn from(extraction: Extraction) -> Self {
        Self::new(extraction.into_schemes())
    }
}

#[derive(Serialize)]
struct LightDark {
    light: String,
    dark: String,
}

struct RoleColors<'a>(&'a SchemePair);

impl Serialize for RoleColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for role in Role::ALL {
            let entry = LightDark {
                light: self.0.light.get(role).to_hex(),
                dark: self.0.dark.get(role).to_hex(),
            };
            map.serialize_entry(role.name(), &entry)?;
        }
        map.end()
    }
}

struct CustomColors<'a>(&'a [CustomColorGroup]);

impl Serialize for CustomColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len() * 4))?;
        for group in self.0 {
            let name = &group.color.name;
            let light = group.get(Appearance::Light).named(name);
            let dark = group.get(Appearance::Dark).named(name);
            for ((role, light), (_, dark)) in light.into_iter().zip(dark) {
                let entry = LightDark {
                    light: light.to_hex(),
                    dark: dark.to_hex(),
                };
                map.serialize_entry(&role, &entry)?;
            }
        }
        map.end()
    }
}

impl Serialize for SchemeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.custom.is_empty() { 2 } else { 3 };
        let mut state = serializer.serialize_struct("SchemeSet", fields)?;
        state.serialize_field("source", &self.pair.source.to_hex())?;
        state.serialize_field("colors", &RoleColors(&self.pair))?;
        if !self.custom.is_empty() {
            state.serialize_field("custom", &CustomColors(&self.custom))?;
        }
        state.end()
    }
}
