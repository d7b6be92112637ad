use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::{AxisValueClasses, Descriptor, ROOT_SLOT};

/// Per-axis variant choices supplied by the caller for one render.
///
/// Key order never affects resolution; axes are always walked in the
/// descriptor's declaration order. Unknown axis names are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selections(IndexMap<String, String>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selection, replacing any earlier value for the axis.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(axis, value);
        self
    }

    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        self.0.insert(axis.into(), value.into());
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.0.get(axis).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selections {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(axis, value)| (axis.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Selections {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Caller-supplied per-slot classes appended after everything the
/// descriptor contributes. Entries naming unknown slots are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides(IndexMap<String, String>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: impl Into<String>, classes: impl Into<String>) -> Self {
        self.0.insert(slot.into(), classes.into());
        self
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(slot, classes)| (slot.as_str(), classes.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Overrides {
    fn from(entries: [(K, V); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(slot, classes)| (slot.into(), classes.into()))
                .collect(),
        )
    }
}

type Fragments<'a> = SmallVec<[&'a str; 4]>;

impl Descriptor {
    /// Resolves `selections` against this descriptor into one class
    /// string per slot.
    ///
    /// Per slot, fragments accumulate in a fixed order: the slot's
    /// base class, then each matching axis contribution in axis
    /// declaration order, then each matching compound variant in
    /// declaration order, then the caller's override. Fragments are
    /// joined with single spaces and never deduplicated; cascade
    /// precedence is the consuming style engine's business.
    ///
    /// Resolution never fails. Unknown axes and unenumerated values
    /// contribute nothing. An explicit selection always wins the
    /// effective-value lookup for its axis, so an explicit-but-invalid
    /// value suppresses the axis default rather than falling back to
    /// it.
    pub fn resolve(
        &self,
        selections: &Selections,
        overrides: Option<&Overrides>,
    ) -> IndexMap<String, String> {
        let mut accumulators: IndexMap<&str, Fragments> =
            IndexMap::with_capacity(self.slots.len());

        for (slot, base) in &self.slots {
            let mut fragments = Fragments::new();
            if !base.is_empty() {
                fragments.push(base);
            }
            accumulators.insert(slot, fragments);
        }

        let effective = |axis: &str| {
            selections
                .get(axis)
                .or_else(|| self.default_variants.get(axis).map(String::as_str))
        };

        for (axis, values) in &self.variants {
            let Some(value) = effective(axis) else {
                continue;
            };
            let Some(classes) = values.get(value) else {
                continue;
            };
            append(&mut accumulators, classes);
        }

        for compound in &self.compound_variants {
            let matched = compound
                .conditions
                .iter()
                .all(|(axis, required)| effective(axis) == Some(required.as_str()));

            if matched {
                append(&mut accumulators, &compound.classes);
            }
        }

        if let Some(overrides) = overrides {
            for (slot, classes) in overrides.iter() {
                if classes.is_empty() {
                    continue;
                }
                if let Some(fragments) = accumulators.get_mut(slot) {
                    fragments.push(classes);
                }
            }
        }

        accumulators
            .into_iter()
            .map(|(slot, fragments)| (slot.to_owned(), fragments.join(" ")))
            .collect()
    }
}

fn append<'a>(accumulators: &mut IndexMap<&str, Fragments<'a>>, classes: &'a AxisValueClasses) {
    match classes {
        AxisValueClasses::Base(class) => {
            if class.is_empty() {
                return;
            }
            if let Some(fragments) = accumulators.get_mut(ROOT_SLOT) {
                fragments.push(class);
            }
        }

        AxisValueClasses::Slots(slots) => {
            for (slot, class) in slots {
                if class.is_empty() {
                    continue;
                }
                if let Some(fragments) = accumulators.get_mut(slot.as_str()) {
                    fragments.push(class);
                }
            }
        }
    }
}
