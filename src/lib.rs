//! Themeable UI component descriptors and their class-variant
//! resolution.
//!
//! The [`veneer_variants`] kernel turns a component's static
//! descriptor plus per-render selections into per-slot class strings;
//! this crate ships the built-in component descriptors, the host
//! configuration that feeds their color axes, and a validated
//! [`Registry`] over all of them.

pub mod theme;

mod config;
pub use config::*;

mod kinds;
pub use kinds::*;

mod registry;
pub use registry::*;

pub use veneer_variants::{
    AxisValueClasses, CompoundVariant, Descriptor, Overrides, Selections, ValidationError,
};
