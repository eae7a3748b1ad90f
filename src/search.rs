use std::collections::BTreeMap;

use crate::arabic::normalize_arabic;
use crate::country::{LabelMode, NormalizedCountry};

/// Countries filed under one title letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySection {
    pub title: String,
    pub items: Vec<NormalizedCountry>,
}

/// Normalize a raw search box value: trimmed and lower-cased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Prepared query for a single `(is_rtl, mode)` combination.
struct Matcher {
    needle: String,
    arabic: bool,
}

impl Matcher {
    fn new(query: &str, is_rtl: bool, mode: LabelMode) -> Self {
        let arabic = mode.matches_arabic(is_rtl);
        let query = normalize_query(query);
        let needle = if arabic { normalize_arabic(&query) } else { query };
        Self { needle, arabic }
    }

    fn matches(&self, country: &NormalizedCountry) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        if self.arabic {
            normalize_arabic(&country.display_name.to_lowercase()).contains(&self.needle)
        } else {
            country.english_name.to_lowercase().contains(&self.needle)
        }
    }
}

/// Section title for a label: its first character, or `""` for an empty
/// label.
fn section_title(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

/// Filter `countries` by `query` and group the matches into sections
/// sorted by title.
///
/// Matching and grouping both use [`LabelMode::label`], so every country
/// in a section starts with that section's title.
pub fn filter_and_section(
    countries: &[NormalizedCountry],
    query: &str,
    is_rtl: bool,
    mode: LabelMode,
) -> Vec<CountrySection> {
    let matcher = Matcher::new(query, is_rtl, mode);

    let mut groups: BTreeMap<String, Vec<NormalizedCountry>> = BTreeMap::new();
    for country in countries.iter().filter(|c| matcher.matches(c)) {
        let title = section_title(mode.label(country, is_rtl));
        groups.entry(title).or_default().push(country.clone());
    }

    groups
        .into_iter()
        .map(|(title, items)| CountrySection { title, items })
        .collect()
}

/// Total number of countries across `sections`.
pub fn item_count(sections: &[CountrySection]) -> usize {
    sections.iter().map(|section| section.items.len()).sum()
}
