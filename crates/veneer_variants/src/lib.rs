//! Slot-based class-variant resolution for themeable components.
//!
//! A component ships a static [`Descriptor`]: named slots with base
//! classes, variant axes mapping axis values to per-slot class
//! fragments, compound variants that fire on conjunctions of axis
//! values, and per-axis defaults. [`Descriptor::resolve`] turns a set
//! of [`Selections`] into one final class string per slot.
//!
//! ```
//! use veneer_variants::{AxisValueClasses, Descriptor, Selections};
//!
//! let descriptor = Descriptor::new()
//!     .slot("border", "border")
//!     .variant("size", "xs", AxisValueClasses::slots([("border", "border-t")]))
//!     .variant("size", "sm", AxisValueClasses::slots([("border", "border-t-2")]))
//!     .default_variant("size", "xs");
//!
//! let classes = descriptor.resolve(&Selections::new(), None);
//! assert_eq!(classes["border"], "border border-t");
//! ```

mod descriptor;
pub use descriptor::*;

mod deserializers;

mod resolve;
pub use resolve::*;

mod validate;
pub use validate::*;
