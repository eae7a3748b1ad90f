//! Country reference data and its locale-aware display form.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw reference dataset keyed by two-letter region code, in file order.
pub type CountriesMap = IndexMap<String, RawCountryRecord>;

/// One country entry as it appears in the reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCountryRecord {
    /// Calling codes, canonical value first.
    pub calling_code: Vec<String>,
    pub currency: Vec<String>,
    pub region: String,
    pub subregion: String,
    pub flag: String,
    pub name: LocalizedNames,
}

impl RawCountryRecord {
    /// Canonical calling code, or `""` when the record has none.
    pub fn primary_calling_code(&self) -> &str {
        self.calling_code.first().map(String::as_str).unwrap_or("")
    }
}

/// Localized country names keyed by language tag.
///
/// `common` (English) and `ara` (Arabic) are the tags the picker resolves
/// display names from; every other tag is kept in `other`. Empty strings are
/// treated the same as a missing tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedNames {
    pub common: String,
    pub ara: String,
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

impl LocalizedNames {
    pub fn common(&self) -> Option<&str> {
        non_empty(&self.common)
    }

    pub fn arabic(&self) -> Option<&str> {
        non_empty(&self.ara)
    }

    /// Look up a name by language tag (`"common"`, `"ara"`, `"fra"`, ...).
    pub fn get(&self, tag: &str) -> Option<&str> {
        match tag {
            "common" => self.common(),
            "ara" => self.arabic(),
            _ => self.other.get(tag).and_then(|value| non_empty(value)),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Selects which name a country is displayed, searched and grouped under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelMode {
    /// Always the English common name, whatever the text direction.
    #[serde(rename = "en")]
    EnglishOnly,
    /// Arabic name when the layout is RTL, English otherwise.
    #[default]
    #[serde(rename = "locale", alias = "ar", alias = "default")]
    LocaleDefault,
}

impl LabelMode {
    /// The label string for `country` under this mode.
    ///
    /// This is the only name-selection rule: search matching and section
    /// titles both go through it so a country never filters under one
    /// letter while grouped under another.
    pub fn label<'a>(self, country: &'a NormalizedCountry, is_rtl: bool) -> &'a str {
        match self {
            LabelMode::LocaleDefault if is_rtl => &country.display_name,
            _ => &country.english_name,
        }
    }

    /// Whether matching for this mode runs against Arabic-normalized text.
    pub fn matches_arabic(self, is_rtl: bool) -> bool {
        self == LabelMode::LocaleDefault && is_rtl
    }
}

impl FromStr for LabelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(LabelMode::EnglishOnly),
            "ar" | "locale" | "default" => Ok(LabelMode::LocaleDefault),
            other => Err(format!("unknown label mode `{}` (expected `en` or `locale`)", other)),
        }
    }
}

impl fmt::Display for LabelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelMode::EnglishOnly => f.write_str("en"),
            LabelMode::LocaleDefault => f.write_str("locale"),
        }
    }
}

/// Display-ready country derived from a [`RawCountryRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCountry {
    pub region_code: String,
    pub calling_code: String,
    pub display_name: String,
    pub english_name: String,
    pub raw_name: LocalizedNames,
}

impl NormalizedCountry {
    pub fn flag(&self) -> String {
        flag_emoji(&self.region_code)
    }

    /// Whether the dataset carries an Arabic name for this country. When it
    /// does not, RTL display falls back to the English name.
    pub fn has_arabic_name(&self) -> bool {
        self.raw_name.arabic().is_some()
    }
}

fn display_name(names: &LocalizedNames, is_rtl: bool, mode: LabelMode) -> &str {
    let name = match mode {
        LabelMode::LocaleDefault if is_rtl => names.arabic().or_else(|| names.common()),
        _ => names.common(),
    };
    name.unwrap_or("")
}

/// Flatten the raw dataset into display-ready countries, in dataset order.
pub fn normalize_countries(
    raw: &CountriesMap,
    is_rtl: bool,
    mode: LabelMode,
) -> Vec<NormalizedCountry> {
    raw.iter()
        .map(|(region_code, record)| NormalizedCountry {
            region_code: region_code.clone(),
            calling_code: record.primary_calling_code().to_string(),
            display_name: display_name(&record.name, is_rtl, mode).to_string(),
            english_name: record.name.common().unwrap_or("").to_string(),
            raw_name: record.name.clone(),
        })
        .collect()
}

/// Flag emoji for a two-letter region code, built from regional indicator
/// symbols. Returns an empty string for anything that is not two ASCII
/// letters.
pub fn flag_emoji(region_code: &str) -> String {
    const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

    let code = region_code.trim();
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return String::new();
    }

    code.bytes()
        .filter_map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b.to_ascii_uppercase() - b'A')))
        .collect()
}

/// Pick the initial country for a phone input: the preferred region code
/// when present in `countries`, else the first country.
pub fn default_country<'a>(
    countries: &'a [NormalizedCountry],
    preferred: Option<&str>,
) -> Option<&'a NormalizedCountry> {
    let preferred = preferred
        .map(|code| code.trim().to_ascii_uppercase())
        .filter(|code| !code.is_empty());

    preferred
        .and_then(|code| countries.iter().find(|c| c.region_code == code))
        .or_else(|| countries.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(calling: &[&str], common: &str, ara: &str) -> RawCountryRecord {
        RawCountryRecord {
            calling_code: calling.iter().map(|s| s.to_string()).collect(),
            name: LocalizedNames {
                common: common.to_string(),
                ara: ara.to_string(),
                other: BTreeMap::new(),
            },
            ..Default::default()
        }
    }

    fn sample() -> CountriesMap {
        let mut map = CountriesMap::new();
        map.insert("EG".into(), record(&["20"], "Egypt", "مصر"));
        map.insert("US".into(), record(&["1", "1340"], "United States", "الولايات المتحدة"));
        map.insert("AQ".into(), record(&[], "Antarctica", ""));
        map
    }

    #[test]
    fn test_english_mode_always_common() {
        let out = normalize_countries(&sample(), true, LabelMode::EnglishOnly);
        let names: Vec<_> = out.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, ["Egypt", "United States", "Antarctica"]);
    }

    #[test]
    fn test_rtl_prefers_arabic_with_fallback() {
        let out = normalize_countries(&sample(), true, LabelMode::LocaleDefault);
        assert_eq!(out[0].display_name, "مصر");
        assert_eq!(out[1].display_name, "الولايات المتحدة");
        assert_eq!(out[2].display_name, "Antarctica");
        assert!(!out[2].has_arabic_name());
        assert!(out.iter().all(|c| !c.english_name.is_empty()));
    }

    #[test]
    fn test_ltr_default_uses_common() {
        let out = normalize_countries(&sample(), false, LabelMode::LocaleDefault);
        assert_eq!(out[0].display_name, "Egypt");
    }

    #[test]
    fn test_order_and_calling_code() {
        let out = normalize_countries(&sample(), false, LabelMode::LocaleDefault);
        let codes: Vec<_> = out.iter().map(|c| c.region_code.as_str()).collect();
        assert_eq!(codes, ["EG", "US", "AQ"]);
        assert_eq!(out[1].calling_code, "1");
        assert_eq!(out[2].calling_code, "");
    }

    #[test]
    fn test_missing_names_resolve_to_empty() {
        let mut map = CountriesMap::new();
        map.insert("XX".into(), RawCountryRecord::default());
        for (rtl, mode) in [
            (true, LabelMode::LocaleDefault),
            (false, LabelMode::LocaleDefault),
            (true, LabelMode::EnglishOnly),
        ] {
            let out = normalize_countries(&map, rtl, mode);
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].display_name, "");
            assert_eq!(out[0].english_name, "");
        }
    }

    #[test]
    fn test_localized_names_lookup() {
        let names: LocalizedNames = serde_json::from_str(
            r#"{"common": "Germany", "ara": "ألمانيا", "fra": "Allemagne", "jpn": ""}"#,
        )
        .unwrap();
        assert_eq!(names.get("common"), Some("Germany"));
        assert_eq!(names.get("ara"), Some("ألمانيا"));
        assert_eq!(names.get("fra"), Some("Allemagne"));
        assert_eq!(names.get("jpn"), None);
        assert_eq!(names.get("kor"), None);
    }

    #[test]
    fn test_label_mode_parse() {
        assert_eq!("en".parse::<LabelMode>(), Ok(LabelMode::EnglishOnly));
        assert_eq!("AR".parse::<LabelMode>(), Ok(LabelMode::LocaleDefault));
        assert_eq!("locale".parse::<LabelMode>(), Ok(LabelMode::LocaleDefault));
        assert!("fr".parse::<LabelMode>().is_err());
        assert_eq!(LabelMode::default(), LabelMode::LocaleDefault);
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(flag_emoji("US"), "🇺🇸");
        assert_eq!(flag_emoji("pk"), "🇵🇰");
        assert_eq!(flag_emoji(""), "");
        assert_eq!(flag_emoji("USA"), "");
        assert_eq!(flag_emoji("1A"), "");
    }

    #[test]
    fn test_default_country() {
        let countries = normalize_countries(&sample(), false, LabelMode::EnglishOnly);
        assert_eq!(default_country(&countries, Some("us")).unwrap().region_code, "US");
        assert_eq!(default_country(&countries, Some("ZZ")).unwrap().region_code, "EG");
        assert_eq!(default_country(&countries, None).unwrap().region_code, "EG");
        assert!(default_country(&[], Some("US")).is_none());
    }
}
