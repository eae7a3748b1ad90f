//! Loading of the country reference dataset.
//!
//! The dataset is a JSON object keyed by region code. Entry order in the
//! file is kept, so the picker lists countries the way the data author
//! ordered them.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::country::CountriesMap;
use crate::error::DatasetError;

const BUNDLED: &str = include_str!("../data/countries.json");

/// Parse a dataset from JSON text.
pub fn parse_str(input: &str) -> Result<CountriesMap, DatasetError> {
    let countries: CountriesMap = serde_json::from_str(input)?;
    if countries.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(countries)
}

/// Read and parse a dataset file.
pub fn load_file(path: &Path) -> Result<CountriesMap, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let countries = parse_str(&raw)?;
    debug!(path = %path.display(), countries = countries.len(), "loaded country dataset");
    Ok(countries)
}

/// The dataset compiled into the crate.
pub fn bundled() -> Result<CountriesMap, DatasetError> {
    parse_str(BUNDLED)
}
