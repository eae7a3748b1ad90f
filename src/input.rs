//! State behind the composite phone-number input: a selected country and
//! the digits typed so far.

use crate::country::{default_country, NormalizedCountry};
use crate::digits::extract_digits;
use crate::phone::{LibPhoneNumber, NumberingPlan, PhoneValidator};

/// What the input reports to its owner on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInputValue {
    pub country: Option<NormalizedCountry>,
    pub phone_number: String,
}

#[derive(Debug, Clone)]
pub struct PhoneInputState<P = LibPhoneNumber> {
    country: Option<NormalizedCountry>,
    phone_number: String,
    valid: bool,
    validator: PhoneValidator<P>,
}

impl PhoneInputState<LibPhoneNumber> {
    /// Start with the preferred region when present, else the first country.
    pub fn new(countries: &[NormalizedCountry], default_region: Option<&str>) -> Self {
        Self::with_validator(countries, default_region, PhoneValidator::default())
    }
}

impl<P: NumberingPlan> PhoneInputState<P> {
    pub fn with_validator(
        countries: &[NormalizedCountry],
        default_region: Option<&str>,
        validator: PhoneValidator<P>,
    ) -> Self {
        Self {
            country: default_country(countries, default_region).cloned(),
            phone_number: String::new(),
            valid: false,
            validator,
        }
    }

    pub fn country(&self) -> Option<&NormalizedCountry> {
        self.country.as_ref()
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn value(&self) -> PhoneInputValue {
        PhoneInputValue {
            country: self.country.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Store the digits of `text`, normalizing Arabic numerals. Returns
    /// whether the validity verdict changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.phone_number = extract_digits(text);
        self.revalidate()
    }

    /// Switch country and keep the typed number. Returns whether the
    /// validity verdict changed.
    pub fn select_country(&mut self, country: NormalizedCountry) -> bool {
        self.country = Some(country);
        self.revalidate()
    }

    /// `+<calling code>` for the selected country, `""` when unknown.
    pub fn calling_code_label(&self) -> String {
        match &self.country {
            Some(country) if !country.calling_code.is_empty() => format!("+{}", country.calling_code),
            _ => String::new(),
        }
    }

    pub fn flag(&self) -> String {
        self.country.as_ref().map(NormalizedCountry::flag).unwrap_or_default()
    }

    /// E.164 form of the current number when it is valid.
    pub fn e164(&self) -> Option<String> {
        let country = self.country.as_ref()?;
        self.validator.format_e164(&self.phone_number, country)
    }

    fn revalidate(&mut self) -> bool {
        let valid = match &self.country {
            Some(country) => self.validator.is_valid(&self.phone_number, country),
            None => false,
        };
        let changed = valid != self.valid;
        self.valid = valid;
        changed
    }
}
