use crate::demo::demo_catalog;
use crate::formats::Print;
use crate::mapper::header_names;

/// CSV text for the built-in catalog, in the column order the sheet must use.
pub fn csv_template() -> String {
    catalog_to_csv(demo_catalog())
}

pub fn catalog_to_csv(prints: &[Print]) -> String {
    let mut lines = Vec::with_capacity(prints.len() + 1);
    lines.push(header_names().join(","));
    lines.extend(prints.iter().map(print_to_csv_line));
    lines.join("\n")
}

fn print_to_csv_line(print: &Print) -> String {
    let featured = if print.featured { "TRUE" } else { "FALSE" };
    [
        escape_cell(&print.slug),
        escape_cell(&print.title),
        escape_cell(&print.description),
        escape_cell(&print.category),
        escape_cell(&print.material),
        escape_cell(&print.purpose),
        escape_cell(&print.notes),
        escape_cell(featured),
        escape_cell(&print.images.join("|")),
        escape_cell(&print.image_alts.join("|")),
    ]
    .join(",")
}

/// Quotes a cell containing `,`, `"` or a newline and doubles inner quotes.
pub fn escape_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
