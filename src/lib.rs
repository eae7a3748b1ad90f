//! Non-visual core of a searchable country picker and phone-number input.
//!
//! The picker normalizes raw country records into display names for the
//! active locale ([`country`]), filters and sections them per keystroke
//! ([`search`], [`catalog`]). The phone input turns typed text into ASCII
//! digits ([`digits`]) and checks them against the selected country
//! ([`phone`], [`input`]).

pub mod arabic;
pub mod catalog;
pub mod config;
pub mod country;
pub mod dataset;
pub mod digits;
pub mod error;
pub mod input;
pub mod memo;
pub mod phone;
pub mod search;

pub use arabic::normalize_arabic;
pub use catalog::CountryCatalog;
pub use country::{
    default_country, flag_emoji, normalize_countries, CountriesMap, LabelMode, LocalizedNames,
    NormalizedCountry, RawCountryRecord,
};
pub use digits::{extract_digits, normalize_digits};
pub use error::{DatasetError, PhoneError};
pub use input::{PhoneInputState, PhoneInputValue};
pub use phone::{
    is_possible_phone_number, is_valid_phone_number, DialTarget, LibPhoneNumber, NumberingPlan,
    PhoneValidationInput, PhoneValidator,
};
pub use search::{filter_and_section, CountrySection};
