use veneer_variants::{AxisValueClasses, Descriptor};

use crate::ModuleOptions;

const SIZES: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];
const WIDTHS: [&str; 5] = ["", "-[2px]", "-[3px]", "-[4px]", "-[5px]"];

/// A horizontal or vertical dividing line with an optional centered
/// label, icon, or avatar.
pub fn separator(options: &ModuleOptions) -> Descriptor {
    let mut descriptor = Descriptor::new()
        .slot("root", "flex items-center align-center text-center")
        .slot("border", "")
        .slot("container", "font-medium text-gray-700 dark:text-gray-200 flex")
        .slot("icon", "shrink-0 size-5")
        .slot("avatar", "shrink-0")
        .slot("label", "text-sm")
        .expand_variant("color", &options.colors, |color| {
            AxisValueClasses::slots([(
                "border",
                format!("border-{color}-500 dark:border-{color}-400"),
            )])
        })
        .variant(
            "color",
            "white",
            AxisValueClasses::slots([("border", "border-white dark:border-gray-900")]),
        )
        .variant(
            "color",
            "gray",
            AxisValueClasses::slots([("border", "border-gray-200 dark:border-gray-800")]),
        )
        .variant(
            "color",
            "black",
            AxisValueClasses::slots([("border", "border-gray-900 dark:border-white")]),
        )
        .variant(
            "orientation",
            "horizontal",
            AxisValueClasses::slots([
                ("root", "w-full flex-row"),
                ("border", "w-full"),
                ("container", "mx-3 whitespace-nowrap"),
            ]),
        )
        .variant(
            "orientation",
            "vertical",
            AxisValueClasses::slots([
                ("root", "h-full flex-col"),
                ("border", "h-full"),
                ("container", "my-2"),
            ]),
        );

    // Size values are placeholders; the actual border width comes from
    // the orientation x size cross product below.
    for size in SIZES {
        descriptor = descriptor.variant("size", size, "");
    }

    descriptor = descriptor
        .variant("type", "solid", AxisValueClasses::slots([("border", "border-solid")]))
        .variant("type", "dashed", AxisValueClasses::slots([("border", "border-dashed")]))
        .variant("type", "dotted", AxisValueClasses::slots([("border", "border-dotted")]));

    for (orientation, edge) in [("horizontal", "t"), ("vertical", "s")] {
        for (size, width) in SIZES.into_iter().zip(WIDTHS) {
            descriptor = descriptor.compound(
                [("orientation", orientation), ("size", size)],
                AxisValueClasses::slots([("border", format!("border-{edge}{width}"))]),
            );
        }
    }

    descriptor
        .default_variant("color", "gray")
        .default_variant("size", "xs")
        .default_variant("type", "solid")
}
