use std::collections::BTreeSet;

use crate::formats::Print;

/// Filter label that matches every category or material.
pub const ALL: &str = "All";

pub const KNOWN_CATEGORIES: [&str; 5] = [ALL, "Sports", "Gifts", "Functional", "Decorative"];

pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES.contains(&category)
}

pub fn featured(prints: &[Print]) -> Vec<&Print> {
    prints.iter().filter(|print| print.featured).collect()
}

/// `"All"` followed by the distinct materials in ascending order.
pub fn materials(prints: &[Print]) -> Vec<String> {
    let distinct = prints
        .iter()
        .map(|print| print.material.as_str())
        .collect::<BTreeSet<_>>();

    std::iter::once(ALL)
        .chain(distinct)
        .map(str::to_owned)
        .collect()
}

pub fn find_by_slug<'a>(prints: &'a [Print], slug: &str) -> Option<&'a Print> {
    prints.iter().find(|print| print.slug == slug)
}

pub fn by_category<'a>(prints: &'a [Print], category: &str) -> Vec<&'a Print> {
    if category == ALL {
        return prints.iter().collect();
    }
    prints
        .iter()
        .filter(|print| print.category == category)
        .collect()
}
