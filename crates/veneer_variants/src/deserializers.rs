use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::AxisValueClasses;

// The authoring format writes an axis value's classes either as a bare
// string (root-slot shorthand, `""` allowed as a placeholder) or as a
// slot map. Slot maps must only hold plain strings, never nested maps.
impl<'de> Deserialize<'de> for AxisValueClasses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrMap {
            String(String),
            Map(IndexMap<String, StringOrMap>),
        }

        match StringOrMap::deserialize(deserializer)? {
            StringOrMap::String(class) => Ok(AxisValueClasses::Base(class)),
            StringOrMap::Map(map) => {
                let mut slots = IndexMap::with_capacity(map.len());

                for (slot, value) in map {
                    match value {
                        StringOrMap::String(class) => {
                            slots.insert(slot, class);
                        }
                        StringOrMap::Map(_) => {
                            return Err(D::Error::custom(format!(
                                "slot '{slot}' must map to a class string, not a nested map"
                            )));
                        }
                    }
                }

                Ok(AxisValueClasses::Slots(slots))
            }
        }
    }
}
