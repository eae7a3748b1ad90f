//! Country list with memoized normalization and search.

use std::sync::Arc;

use tracing::debug;

use crate::country::{normalize_countries, CountriesMap, LabelMode, NormalizedCountry};
use crate::memo::Memo;
use crate::search::{filter_and_section, CountrySection};

/// Memo key that compares an `Arc` by identity.
#[derive(Debug)]
struct ByAddress<T: ?Sized>(Arc<T>);

impl<T: ?Sized> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

type NormalizeKey = (ByAddress<CountriesMap>, bool, LabelMode);
type SectionKey = (ByAddress<[NormalizedCountry]>, String, bool, LabelMode);

/// Owns the immutable raw dataset and caches the derived views.
///
/// The normalized list is recomputed only when the dataset, the RTL flag or
/// the label mode change; sections additionally depend on the query.
#[derive(Debug)]
pub struct CountryCatalog {
    raw: Arc<CountriesMap>,
    normalized: Memo<NormalizeKey, Arc<[NormalizedCountry]>>,
    sections: Memo<SectionKey, Arc<[CountrySection]>>,
}

impl CountryCatalog {
    pub fn new(raw: impl Into<Arc<CountriesMap>>) -> Self {
        Self {
            raw: raw.into(),
            normalized: Memo::new(),
            sections: Memo::new(),
        }
    }

    pub fn raw(&self) -> &Arc<CountriesMap> {
        &self.raw
    }

    /// Replace the dataset. Cached views are invalidated on next access.
    pub fn set_raw(&mut self, raw: impl Into<Arc<CountriesMap>>) {
        self.raw = raw.into();
    }

    pub fn normalized(&mut self, is_rtl: bool, mode: LabelMode) -> Arc<[NormalizedCountry]> {
        let key = (ByAddress(Arc::clone(&self.raw)), is_rtl, mode);
        Arc::clone(self.normalized.get_or_compute(key, |(raw, is_rtl, mode)| {
            debug!(countries = raw.0.len(), is_rtl, %mode, "normalizing countries");
            normalize_countries(&raw.0, *is_rtl, *mode).into()
        }))
    }

    pub fn sections(&mut self, query: &str, is_rtl: bool, mode: LabelMode) -> Arc<[CountrySection]> {
        let countries = self.normalized(is_rtl, mode);
        let key = (ByAddress(countries), query.to_string(), is_rtl, mode);
        Arc::clone(self.sections.get_or_compute(key, |(countries, query, is_rtl, mode)| {
            debug!(query = %query, "sectioning countries");
            filter_and_section(&countries.0, query, *is_rtl, *mode).into()
        }))
    }

    /// Look up a normalized country by region code (case-insensitive).
    pub fn find(&mut self, region_code: &str, is_rtl: bool, mode: LabelMode) -> Option<NormalizedCountry> {
        let code = region_code.trim();
        self.normalized(is_rtl, mode)
            .iter()
            .find(|c| c.region_code.eq_ignore_ascii_case(code))
            .cloned()
    }

    pub fn normalize_count(&self) -> u64 {
        self.normalized.computations()
    }

    pub fn section_count(&self) -> u64 {
        self.sections.computations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn test_normalized_is_memoized() {
        let mut catalog = CountryCatalog::new(dataset::bundled().unwrap());
        let a = catalog.normalized(true, LabelMode::LocaleDefault);
        let b = catalog.normalized(true, LabelMode::LocaleDefault);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(catalog.normalize_count(), 1);
    }

    #[test]
    fn test_normalized_recomputes_on_key_change() {
        let mut catalog = CountryCatalog::new(dataset::bundled().unwrap());
        catalog.normalized(true, LabelMode::LocaleDefault);
        catalog.normalized(false, LabelMode::LocaleDefault);
        catalog.normalized(false, LabelMode::EnglishOnly);
        assert_eq!(catalog.normalize_count(), 3);

        // an equal but distinct dataset is a new key
        let copy = CountriesMap::clone(catalog.raw());
        catalog.set_raw(copy);
        catalog.normalized(false, LabelMode::EnglishOnly);
        assert_eq!(catalog.normalize_count(), 4);
    }

    #[test]
    fn test_sections_memoized_per_query() {
        let mut catalog = CountryCatalog::new(dataset::bundled().unwrap());
        let first = catalog.sections("eg", false, LabelMode::LocaleDefault);
        let again = catalog.sections("eg", false, LabelMode::LocaleDefault);
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(catalog.section_count(), 1);

        catalog.sections("egy", false, LabelMode::LocaleDefault);
        assert_eq!(catalog.section_count(), 2);
        assert_eq!(catalog.normalize_count(), 1);
    }

    #[test]
    fn test_find_case_insensitive() {
        let mut catalog = CountryCatalog::new(dataset::bundled().unwrap());
        let us = catalog.find("us", false, LabelMode::EnglishOnly).unwrap();
        assert_eq!(us.calling_code, "1");
        assert!(catalog.find("zz", false, LabelMode::EnglishOnly).is_none());
    }
}
