use std::sync::LazyLock;

use crate::formats::Print;

static DEMO_CATALOG: LazyLock<Vec<Print>> = LazyLock::new(|| {
    vec![
        demo_print(
            "geometric-planter",
            "Low-Poly Planter",
            "A modern geometric planter designed for succulents. Features internal drainage mesh.",
            "Decorative",
            "Matte PLA",
            "gift",
            "0.2mm layer height, 15% infill",
            true,
            &[
                ("https://picsum.photos/id/106/800/600", "Front view of planter"),
                ("https://picsum.photos/id/106/800/800", "Top detail view"),
            ],
        ),
        demo_print(
            "headphone-stand",
            "Desk Clamp Headphone Stand",
            "Rugged screw-clamp headphone holder to save desk space.",
            "Functional",
            "PETG",
            "personal",
            "Printed with 4 perimeters for strength",
            true,
            &[("https://picsum.photos/id/250/800/600", "Mounted on desk")],
        ),
        demo_print(
            "golf-ball-marker",
            "Custom Golf Marker",
            "Personalized monogram ball marker for the green.",
            "Sports",
            "PLA Silk",
            "custom",
            "Multi-color print swap at layer 15",
            true,
            &[("https://picsum.photos/id/433/800/600", "Marker on grass")],
        ),
        demo_print(
            "lithophane-box",
            "Lithophane Light Box",
            "A personalized photo box that reveals a detailed image when lit from within. Perfect for weddings or memorials.",
            "Gifts",
            "White PLA",
            "gift",
            "Printed vertically at 0.12mm layer height for high resolution.",
            true,
            &[(
                "https://picsum.photos/id/30/800/800",
                "Lit lithophane showing a family portrait",
            )],
        ),
        demo_print(
            "controller-mount",
            "Universal Controller Mount",
            "Wall-mounted holder for Xbox and PlayStation controllers. Includes screw holes and adhesive backing area.",
            "Functional",
            "PETG",
            "personal",
            "Needs support for the hook section.",
            true,
            &[(
                "https://picsum.photos/id/96/800/600",
                "Controller resting on wall mount",
            )],
        ),
        demo_print(
            "voronoi-vase",
            "Twisted Voronoi Vase",
            "An organic, cellular structure vase that casts beautiful shadows. Strictly decorative, not water tight.",
            "Decorative",
            "Silk Gold PLA",
            "custom",
            "Slow print speed required for overhangs.",
            true,
            &[(
                "https://picsum.photos/id/113/800/1000",
                "Gold vase with holes pattern",
            )],
        ),
        demo_print(
            "cable-clips",
            "Under-Desk Cable Clips",
            "Snap-fit cable organizers to keep charging cords tidy under the desk.",
            "Functional",
            "ABS",
            "personal",
            "Printed in batches of 10 for efficiency.",
            false,
            &[(
                "https://picsum.photos/id/20/800/600",
                "Black clips organizing USB cables",
            )],
        ),
    ]
});

/// Built-in catalog served when no sheet is configured or the sheet fails to load.
pub fn demo_catalog() -> &'static [Print] {
    &DEMO_CATALOG
}

#[allow(clippy::too_many_arguments)]
fn demo_print(
    slug: &str,
    title: &str,
    description: &str,
    category: &str,
    material: &str,
    purpose: &str,
    notes: &str,
    featured: bool,
    images: &[(&str, &str)],
) -> Print {
    Print {
        slug: slug.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        material: material.to_owned(),
        purpose: purpose.to_owned(),
        notes: notes.to_owned(),
        featured,
        images: images.iter().map(|(url, _)| (*url).to_owned()).collect(),
        image_alts: images.iter().map(|(_, alt)| (*alt).to_owned()).collect(),
    }
}
