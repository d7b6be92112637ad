use veneer_variants::{AxisValueClasses, Descriptor};

use crate::ModuleOptions;

const VARIANTS: [&str; 4] = ["solid", "outline", "soft", "subtle"];

/// A callout box with a title, optional description, icon or avatar,
/// and action buttons.
///
/// Color and variant values are placeholders; the actual look comes
/// from the color x variant cross product.
pub fn alert(options: &ModuleOptions) -> Descriptor {
    let mut descriptor = Descriptor::new()
        .slot("root", "relative overflow-hidden w-full rounded-lg p-4 flex gap-2.5")
        .slot("wrapper", "min-w-0 flex-1 flex flex-col gap-1")
        .slot("title", "text-sm font-medium")
        .slot("description", "text-sm opacity-90")
        .slot("icon", "shrink-0 size-5")
        .slot("avatar", "shrink-0")
        .slot("actions", "flex gap-1.5 shrink-0")
        .slot("close", "p-0.5")
        .expand_variant("color", &options.colors, |_color| "".into());

    for variant in VARIANTS {
        descriptor = descriptor.variant("variant", variant, "");
    }

    for color in &options.colors {
        descriptor = descriptor
            .compound(
                [("color", color.as_str()), ("variant", "solid")],
                AxisValueClasses::slots([(
                    "root",
                    format!("bg-{color}-500 dark:bg-{color}-400 text-white dark:text-gray-900"),
                )]),
            )
            .compound(
                [("color", color.as_str()), ("variant", "outline")],
                AxisValueClasses::slots([(
                    "root",
                    format!(
                        "text-{color}-500 dark:text-{color}-400 ring-1 ring-inset \
                         ring-{color}-500 dark:ring-{color}-400"
                    ),
                )]),
            )
            .compound(
                [("color", color.as_str()), ("variant", "soft")],
                AxisValueClasses::slots([(
                    "root",
                    format!(
                        "bg-{color}-50 dark:bg-{color}-400/10 text-{color}-500 \
                         dark:text-{color}-400"
                    ),
                )]),
            )
            .compound(
                [("color", color.as_str()), ("variant", "subtle")],
                AxisValueClasses::slots([(
                    "root",
                    format!(
                        "bg-{color}-50 dark:bg-{color}-400/10 text-{color}-500 \
                         dark:text-{color}-400 ring-1 ring-inset ring-{color}-500/25 \
                         dark:ring-{color}-400/25"
                    ),
                )]),
            );
    }

    let default_color = options.colors.first().map(String::as_str).unwrap_or("primary");

    descriptor
        .default_variant("color", default_color)
        .default_variant("variant", "solid")
}

#[cfg(test)]
mod tests {
    use veneer_variants::Selections;

    use super::*;

    #[test]
    fn test_descriptor_validates() {
        assert_eq!(alert(&ModuleOptions::default()).validate(), Ok(()));
    }

    #[test]
    fn test_defaults_to_solid_primary() {
        let descriptor = alert(&ModuleOptions::default());
        let classes = descriptor.resolve(&Selections::new(), None);

        assert!(classes["root"].contains("bg-primary-500"));
        assert!(classes["root"].starts_with("relative overflow-hidden"));
    }

    #[test]
    fn test_every_color_and_variant_pair_styles_the_root() {
        let options = ModuleOptions::default();
        let descriptor = alert(&options);

        for color in &options.colors {
            for variant in VARIANTS {
                let classes = descriptor.resolve(
                    &Selections::new().with("color", color).with("variant", variant),
                    None,
                );
                assert!(
                    classes["root"].contains(&format!("{color}-")),
                    "{color}/{variant}: got {}",
                    classes["root"]
                );
            }
        }
    }

    #[test]
    fn test_outline_has_no_background() {
        let descriptor = alert(&ModuleOptions::default());
        let classes = descriptor.resolve(
            &Selections::from([("color", "red"), ("variant", "outline")]),
            None,
        );

        assert!(classes["root"].contains("ring-red-500"));
        assert!(!classes["root"].contains("bg-red-500"));
    }

    #[test]
    fn test_unknown_color_keeps_base_classes_only() {
        let descriptor = alert(&ModuleOptions::default());
        let classes = descriptor.resolve(&Selections::from([("color", "chartreuse")]), None);

        // No compound can match without a valid color, and the invalid
        // explicit selection suppresses the default.
        assert_eq!(
            classes["root"],
            "relative overflow-hidden w-full rounded-lg p-4 flex gap-2.5"
        );
    }

    #[test]
    fn test_custom_palette_replaces_default_colors() {
        let options = ModuleOptions::from_json(r#"{ "colors": ["brand"] }"#).unwrap();
        let descriptor = alert(&options);

        let classes = descriptor.resolve(
            &Selections::from([("color", "brand"), ("variant", "soft")]),
            None,
        );
        assert!(classes["root"].contains("bg-brand-50"));

        let classes = descriptor.resolve(&Selections::from([("color", "red")]), None);
        assert!(!classes["root"].contains("red"));
    }
}
