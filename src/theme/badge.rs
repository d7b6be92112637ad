use veneer_variants::{AxisValueClasses, Descriptor};

use crate::ModuleOptions;

const VARIANTS: [&str; 4] = ["solid", "outline", "soft", "subtle"];

/// A small inline label, sized independently of its color and variant.
pub fn badge(options: &ModuleOptions) -> Descriptor {
    let mut descriptor = Descriptor::new()
        .slot("root", "font-medium inline-flex items-center rounded-md")
        .slot("label", "truncate")
        .expand_variant("color", &options.colors, |_color| "".into())
        .variant(
            "size",
            "xs",
            AxisValueClasses::slots([("root", "text-xs px-1.5 py-0.5 gap-1")]),
        )
        .variant(
            "size",
            "sm",
            AxisValueClasses::slots([("root", "text-xs px-2 py-1 gap-1")]),
        )
        .variant(
            "size",
            "md",
            AxisValueClasses::slots([("root", "text-sm px-2 py-1 gap-1.5")]),
        )
        .variant(
            "size",
            "lg",
            AxisValueClasses::slots([("root", "text-sm px-2.5 py-1.5 gap-1.5")]),
        );

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
                         ring-{color}-500/50 dark:ring-{color}-400/50"
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
        .default_variant("size", "md")
}
