use veneer_variants::{AxisValueClasses, Descriptor};

use crate::ModuleOptions;

/// A transient notification card with a progress bar tinted by the
/// toast's color.
pub fn toast(options: &ModuleOptions) -> Descriptor {
    let descriptor = Descriptor::new()
        .slot(
            "root",
            "relative group overflow-hidden w-full rounded-lg shadow-lg p-4 flex gap-2.5",
        )
        .slot("wrapper", "min-w-0 flex-1 flex flex-col gap-1")
        .slot("title", "text-sm font-medium text-gray-900 dark:text-white")
        .slot("description", "text-sm text-gray-500 dark:text-gray-400")
        .slot("icon", "shrink-0 size-5")
        .slot("avatar", "shrink-0")
        .slot("actions", "flex gap-1.5 shrink-0 items-center")
        .slot("progress", "absolute inset-x-0 bottom-0 h-1")
        .slot("close", "p-0.5")
        .expand_variant("color", &options.colors, |color| {
            AxisValueClasses::slots([
                ("icon", format!("text-{color}-500 dark:text-{color}-400")),
                ("progress", format!("bg-{color}-500 dark:bg-{color}-400")),
            ])
        })
        .variant(
            "type",
            "foreground",
            AxisValueClasses::slots([("root", "bg-white dark:bg-gray-900")]),
        )
        .variant(
            "type",
            "background",
            AxisValueClasses::slots([("root", "bg-gray-50 dark:bg-gray-800")]),
        );

    let default_color = options.colors.first().map(String::as_str).unwrap_or("primary");

    descriptor
        .default_variant("color", default_color)
        .default_variant("type", "foreground")
}

#[cfg(test)]
mod tests {
    use veneer_variants::Selections;

    use super::*;

    #[test]
    fn test_descriptor_validates() {
        assert_eq!(toast(&ModuleOptions::default()).validate(), Ok(()));
    }

    #[test]
    fn test_color_tints_icon_and_progress() {
        let options = ModuleOptions::default();
        let descriptor = toast(&options);

        for color in &options.colors {
            let classes = descriptor.resolve(&Selections::new().with("color", color), None);
            assert!(classes["icon"].contains(&format!("text-{color}-500")));
            assert!(classes["progress"].contains(&format!("bg-{color}-500")));
        }
    }

    #[test]
    fn test_background_type_changes_only_the_root() {
        let descriptor = toast(&ModuleOptions::default());

        let foreground = descriptor.resolve(&Selections::new(), None);
        let background =
            descriptor.resolve(&Selections::from([("type", "background")]), None);

        assert!(foreground["root"].contains("bg-white"));
        assert!(background["root"].contains("bg-gray-50"));
        assert_eq!(foreground["icon"], background["icon"]);
        assert_eq!(foreground["progress"], background["progress"]);
    }
}
