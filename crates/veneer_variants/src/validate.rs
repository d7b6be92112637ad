use thiserror::Error;

use crate::Descriptor;

/// An authoring-time inconsistency in a [`Descriptor`].
///
/// None of these surface at resolve time; resolution degrades by
/// omission instead. Validation exists so descriptor bugs fail a
/// build or test run rather than shipping as silent styling gaps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("axis `{axis}` value `{value}` targets unknown slot `{slot}`")]
    UnknownSlot {
        axis: String,
        value: String,
        slot: String,
    },

    #[error("compound variant #{index} targets unknown slot `{slot}`")]
    UnknownCompoundSlot { index: usize, slot: String },

    #[error("compound variant #{index} constrains undeclared axis `{axis}`")]
    UnknownAxis { index: usize, axis: String },

    #[error("compound variant #{index} requires `{axis}` = `{value}`, which the axis never enumerates")]
    UnenumeratedValue {
        index: usize,
        axis: String,
        value: String,
    },

    #[error("compound variant #{index} has no conditions")]
    EmptyCompound { index: usize },

    #[error("default for undeclared axis `{axis}`")]
    UnknownDefaultAxis { axis: String },

    #[error("default for axis `{axis}` is `{value}`, which the axis never enumerates")]
    UnknownDefault { axis: String, value: String },
}

impl Descriptor {
    /// Checks the static invariants every descriptor must uphold:
    /// axes and compound variants only reference declared slots,
    /// compound conditions only reference declared axes and
    /// enumerated values, and defaults name enumerated values.
    ///
    /// Returns the first inconsistency found, in declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (axis, values) in &self.variants {
            for (value, classes) in values {
                for slot in Self::touched_slots(classes) {
                    if !self.slots.contains_key(slot) {
                        return Err(ValidationError::UnknownSlot {
                            axis: axis.clone(),
                            value: value.clone(),
                            slot: slot.to_owned(),
                        });
                    }
                }
            }
        }

        for (index, compound) in self.compound_variants.iter().enumerate() {
            if compound.conditions.is_empty() {
                return Err(ValidationError::EmptyCompound { index });
            }

            for (axis, value) in &compound.conditions {
                let Some(values) = self.variants.get(axis) else {
                    return Err(ValidationError::UnknownAxis {
                        index,
                        axis: axis.clone(),
                    });
                };
                if !values.contains_key(value) {
                    return Err(ValidationError::UnenumeratedValue {
                        index,
                        axis: axis.clone(),
                        value: value.clone(),
                    });
                }
            }

            for slot in Self::touched_slots(&compound.classes) {
                if !self.slots.contains_key(slot) {
                    return Err(ValidationError::UnknownCompoundSlot {
                        index,
                        slot: slot.to_owned(),
                    });
                }
            }
        }

        for (axis, value) in &self.default_variants {
            let Some(values) = self.variants.get(axis) else {
                return Err(ValidationError::UnknownDefaultAxis { axis: axis.clone() });
            };
            if !values.contains_key(value) {
                return Err(ValidationError::UnknownDefault {
                    axis: axis.clone(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
