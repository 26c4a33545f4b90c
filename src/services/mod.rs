pub mod comparison;
pub mod theme;

pub use comparison::{
    compare, compare_roles, Comparison, ImageRef, ReferenceError, ReferenceSchemes, RoleMismatch,
};
pub use theme::ThemeService;
