use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// The slot a bare-string axis value contributes to.
pub const ROOT_SLOT: &str = "root";

/// An ordered mapping from axis value to the classes it contributes.
pub type Axis = IndexMap<String, AxisValueClasses>;

/// A component's static theme table: slots, variant axes, compound
/// variants, and per-axis defaults.
///
/// Descriptors are constructed once per component, validated, and
/// never mutated afterwards. Declaration order is significant
/// everywhere: axes contribute in the order they were declared, and
/// later compound variants layer their classes after earlier ones.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Descriptor {
    /// Base class per slot. Slots absent here may not be referenced
    /// by any axis or compound variant.
    pub slots: IndexMap<String, String>,
    /// Variant axes in declaration order.
    pub variants: IndexMap<String, Axis>,
    /// Conditional overrides, applied in declaration order after all
    /// axis contributions.
    pub compound_variants: Vec<CompoundVariant>,
    /// Fallback value per axis, used when the caller omits the axis.
    pub default_variants: IndexMap<String, String>,
}

/// Classes contributed by one axis value: either a bare string for
/// the [`ROOT_SLOT`], or a per-slot map.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AxisValueClasses {
    /// A single class string applied to the root slot. The empty
    /// string is a valid placeholder that contributes nothing.
    Base(String),
    /// Class fragments keyed by slot name.
    Slots(IndexMap<String, String>),
}

impl AxisValueClasses {
    /// Builds a per-slot fragment map from `(slot, classes)` pairs.
    pub fn slots<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Slots(
            entries
                .into_iter()
                .map(|(slot, classes)| (slot.into(), classes.into()))
                .collect(),
        )
    }
}

impl From<&str> for AxisValueClasses {
    fn from(classes: &str) -> Self {
        Self::Base(classes.to_owned())
    }
}

impl From<String> for AxisValueClasses {
    fn from(classes: String) -> Self {
        Self::Base(classes)
    }
}

/// A rule that fires when every listed axis holds the required value,
/// contributing extra per-slot classes on top of the axis
/// contributions.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Axis-value equalities that must all hold, in authoring order.
    #[serde(flatten)]
    pub conditions: IndexMap<String, String>,
    /// Classes contributed when the conditions match.
    #[serde(rename = "class")]
    pub classes: AxisValueClasses,
}

impl CompoundVariant {
    /// Builds a compound variant from `(axis, value)` conditions and
    /// the classes it contributes.
    pub fn new<I, K, V>(conditions: I, classes: impl Into<AxisValueClasses>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            conditions: conditions
                .into_iter()
                .map(|(axis, value)| (axis.into(), value.into()))
                .collect(),
            classes: classes.into(),
        }
    }
}

impl Default for AxisValueClasses {
    fn default() -> Self {
        Self::Slots(IndexMap::new())
    }
}

impl Descriptor {
    /// Creates an empty descriptor to be filled through the builder
    /// methods below.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a descriptor from its JSON authoring format.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }

    /// Declares a slot with its base class. The empty string declares
    /// a slot without a base class.
    pub fn slot(mut self, name: impl Into<String>, base: impl Into<String>) -> Self {
        self.slots.insert(name.into(), base.into());
        self
    }

    /// Declares the classes one axis value contributes. The axis is
    /// created on first mention; axis order is first-mention order.
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
        classes: impl Into<AxisValueClasses>,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), classes.into());
        self
    }

    /// Appends a compound variant. Declaration order decides layering.
    pub fn compound<I, K, V>(
        mut self,
        conditions: I,
        classes: impl Into<AxisValueClasses>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.compound_variants
            .push(CompoundVariant::new(conditions, classes));
        self
    }

    /// Sets the fallback value used when the caller omits `axis`.
    pub fn default_variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_variants.insert(axis.into(), value.into());
        self
    }

    /// Expands an external list of identifiers into entries of `axis`,
    /// deriving each entry's classes from its identifier. Expanded
    /// entries behave exactly like hand-authored ones.
    pub fn expand_variant<I, S, F>(mut self, axis: impl Into<String>, values: I, mut classes: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str) -> AxisValueClasses,
    {
        let entries = self.variants.entry(axis.into()).or_default();
        for value in values {
            let value = value.as_ref();
            entries.insert(value.to_owned(), classes(value));
        }
        self
    }

    /// Names of all slot fragments a value-classes entry touches.
    pub(crate) fn touched_slots(classes: &AxisValueClasses) -> SmallVec<[&str; 4]> {
        match classes {
            AxisValueClasses::Base(class) if class.is_empty() => SmallVec::new(),
            AxisValueClasses::Base(_) => smallvec![ROOT_SLOT],
            AxisValueClasses::Slots(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_authoring_format() {
        let descriptor = Descriptor::from_json(
            r#"{
                "slots": { "root": "flex", "border": "" },
                "variants": {
                    "orientation": {
                        "horizontal": { "root": "w-full flex-row", "border": "w-full" },
                        "vertical": { "root": "h-full flex-col", "border": "h-full" }
                    },
                    "size": { "xs": "", "sm": "" }
                },
                "compoundVariants": [
                    { "orientation": "horizontal", "size": "xs", "class": { "border": "border-t" } }
                ],
                "defaultVariants": { "size": "xs" }
            }"#,
        )
        .unwrap();

        assert_eq!(descriptor.slots.len(), 2);
        assert_eq!(descriptor.variants["orientation"].len(), 2);
        assert!(matches!(
            descriptor.variants["size"]["xs"],
            AxisValueClasses::Base(ref base) if base.is_empty()
        ));

        let compound = &descriptor.compound_variants[0];
        assert_eq!(compound.conditions["orientation"], "horizontal");
        assert_eq!(compound.conditions["size"], "xs");
        assert_eq!(descriptor.default_variants["size"], "xs");
    }

    #[test]
    fn test_axis_order_is_declaration_order() {
        let descriptor = Descriptor::new()
            .variant("color", "red", "text-red-500")
            .variant("size", "xs", "text-xs")
            .variant("color", "blue", "text-blue-500");

        let axes: Vec<&str> = descriptor.variants.keys().map(String::as_str).collect();
        assert_eq!(axes, ["color", "size"]);

        let colors: Vec<&str> = descriptor.variants["color"]
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(colors, ["red", "blue"]);
    }

    #[test]
    fn test_expand_variant_matches_hand_authored() {
        let expanded = Descriptor::new().slot("border", "").expand_variant(
            "color",
            ["red", "green"],
            |color| AxisValueClasses::slots([("border", format!("border-{color}-500"))]),
        );

        let authored = Descriptor::new()
            .slot("border", "")
            .variant(
                "color",
                "red",
                AxisValueClasses::slots([("border", "border-red-500")]),
            )
            .variant(
                "color",
                "green",
                AxisValueClasses::slots([("border", "border-green-500")]),
            );

        for color in ["red", "green"] {
            let selections = crate::Selections::new().with("color", color);
            assert_eq!(
                expanded.resolve(&selections, None),
                authored.resolve(&selections, None)
            );
        }
    }

    #[test]
    fn test_round_trips_through_json() {
        let descriptor = Descriptor::new()
            .slot("root", "flex")
            .variant("size", "xs", "")
            .variant(
                "size",
                "sm",
                AxisValueClasses::slots([("root", "text-sm")]),
            )
            .compound([("size", "sm")], AxisValueClasses::slots([("root", "gap-2")]))
            .default_variant("size", "xs");

        let json = serde_json::to_string(&descriptor).unwrap();
        let reparsed = Descriptor::from_json(&json).unwrap();

        assert_eq!(
            descriptor.resolve(&crate::Selections::new().with("size", "sm"), None),
            reparsed.resolve(&crate::Selections::new().with("size", "sm"), None)
        );
    }
}
