use crate::drive_link::normalize_image_link;
use crate::formats::Print;

/// Rows with fewer tokenized fields than this are dropped.
pub const MIN_FIELDS: usize = 5;

const LIST_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Slug,
    Title,
    Description,
    Category,
    Material,
    Purpose,
    Notes,
    Featured,
    Images,
    ImageAlts,
}

impl Column {
    /// Fixed positional order of the sheet.
    pub const ALL: [Column; 10] = [
        Column::Slug,
        Column::Title,
        Column::Description,
        Column::Category,
        Column::Material,
        Column::Purpose,
        Column::Notes,
        Column::Featured,
        Column::Images,
        Column::ImageAlts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Slug => "slug",
            Column::Title => "title",
            Column::Description => "description",
            Column::Category => "category",
            Column::Material => "material",
            Column::Purpose => "purpose",
            Column::Notes => "notes",
            Column::Featured => "featured",
            Column::Images => "images",
            Column::ImageAlts => "imageAlts",
        }
    }

    fn position(self) -> usize {
        self as usize
    }

    fn is_required(self) -> bool {
        self.position() < MIN_FIELDS
    }
}

pub fn header_names() -> [&'static str; 10] {
    Column::ALL.map(Column::name)
}

/// Where each column lives in a tokenized row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    indices: [Option<usize>; 10],
    from_header: bool,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::positional()
    }
}

impl ColumnLayout {
    pub fn positional() -> Self {
        Self {
            indices: std::array::from_fn(Some),
            from_header: false,
        }
    }

    /// Resolves columns by header name, ignoring case, spaces, `_` and `-`.
    ///
    /// Falls back to the positional layout unless every required column
    /// (`slug` through `material`) is named in the header. A column the header
    /// does not name is read from its fixed position when no named column
    /// occupies that position.
    pub fn from_header(header: &[String]) -> Self {
        let normalized = header
            .iter()
            .map(|name| normalize_header_name(name))
            .collect::<Vec<_>>();

        let indices = Column::ALL.map(|column| {
            let wanted = normalize_header_name(column.name());
            normalized.iter().position(|name| *name == wanted)
        });

        let has_required = Column::ALL
            .iter()
            .filter(|column| column.is_required())
            .all(|column| indices[column.position()].is_some());
        if !has_required {
            return Self::positional();
        }

        // Unnamed columns keep their fixed position unless a named column sits there.
        let claimed = indices;
        let indices = Column::ALL.map(|column| {
            claimed[column.position()].or_else(|| {
                let fallback = column.position();
                (!claimed.contains(&Some(fallback))).then_some(fallback)
            })
        });

        Self {
            indices,
            from_header: true,
        }
    }

    pub fn is_from_header(&self) -> bool {
        self.from_header
    }

    fn get<'a>(&self, fields: &'a [String], column: Column) -> Option<&'a str> {
        let index = self.indices[column.position()]?;
        fields.get(index).map(String::as_str)
    }

    fn text(&self, fields: &[String], column: Column) -> String {
        self.get(fields, column).unwrap_or_default().to_owned()
    }
}

fn normalize_header_name(name: &str) -> String {
    name.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Maps one tokenized data row onto a [`Print`], or `None` when the row has
/// fewer than [`MIN_FIELDS`] fields.
///
/// A missing or blank `images`/`imageAlts` cell maps to an empty list rather
/// than a single empty string; non-blank cells keep inner empty pieces.
pub fn map_row(fields: &[String], layout: &ColumnLayout) -> Option<Print> {
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(Print {
        slug: layout.text(fields, Column::Slug),
        title: layout.text(fields, Column::Title),
        description: layout.text(fields, Column::Description),
        category: layout.text(fields, Column::Category),
        material: layout.text(fields, Column::Material),
        purpose: layout.text(fields, Column::Purpose),
        notes: layout.text(fields, Column::Notes),
        featured: parse_featured(layout.get(fields, Column::Featured)),
        images: split_list(layout.get(fields, Column::Images))
            .map(|url| normalize_image_link(&url))
            .collect(),
        image_alts: split_list(layout.get(fields, Column::ImageAlts)).collect(),
    })
}

pub fn parse_featured(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.trim().to_uppercase() == "TRUE")
}

/// Splits a `|`-joined cell. A missing or blank cell is an empty list; inner
/// blanks are kept so images and alts stay aligned.
fn split_list(raw: Option<&str>) -> impl Iterator<Item = String> + '_ {
    raw.filter(|value| !value.trim().is_empty())
        .into_iter()
        .flat_map(|value| value.split(LIST_SEPARATOR))
        .map(|piece| piece.trim().to_owned())
}
