use serde::{Deserialize, Deserializer, de::Error};

/// Host-application configuration for the component library.
///
/// `colors` is the palette of color identifiers the color axes of
/// every component descriptor are expanded from. The list is read
/// once when descriptors are constructed; entries behave exactly like
/// hand-authored axis values afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModuleOptions {
    #[serde(deserialize_with = "de_non_empty_colors")]
    pub colors: Vec<String>,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            colors: [
                "primary", "red", "orange", "amber", "yellow", "lime", "green", "emerald",
                "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
                "pink", "rose",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}

impl ModuleOptions {
    /// Parses options from their JSON configuration format.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json.as_ref())
    }
}

fn de_non_empty_colors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let colors = Vec::deserialize(deserializer)?;

    if colors.is_empty() {
        return Err(D::Error::custom("color list can't be empty."));
    }

    Ok(colors)
}
