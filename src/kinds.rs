#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

/// Separator orientation values.
///
/// Use `value()` to get the axis value string the descriptor
/// enumerates.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn value(&self) -> &'static str)]
pub enum SeparatorOrientation {
    /// A full-width divider.
    #[assoc(value = "horizontal")]
    Horizontal,
    /// A full-height divider.
    #[assoc(value = "vertical")]
    Vertical,
}

/// Separator thickness values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn value(&self) -> &'static str)]
pub enum SeparatorSize {
    #[assoc(value = "xs")]
    Xs,
    #[assoc(value = "sm")]
    Sm,
    #[assoc(value = "md")]
    Md,
    #[assoc(value = "lg")]
    Lg,
    #[assoc(value = "xl")]
    Xl,
}

/// Separator border style values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn value(&self) -> &'static str)]
pub enum BorderType {
    #[assoc(value = "solid")]
    Solid,
    #[assoc(value = "dashed")]
    Dashed,
    #[assoc(value = "dotted")]
    Dotted,
}

/// Emphasis variants shared by alert and badge.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn value(&self) -> &'static str)]
pub enum EmphasisVariant {
    /// Filled background, inverted text.
    #[assoc(value = "solid")]
    Solid,
    /// Colored ring, no background.
    #[assoc(value = "outline")]
    Outline,
    /// Tinted background.
    #[assoc(value = "soft")]
    Soft,
    /// Tinted background plus a faint ring.
    #[assoc(value = "subtle")]
    Subtle,
}
