//! Phone-number validity checks for a selected country.
//!
//! The numbering-plan metadata comes from `rlibphonenumber`; this module
//! only builds the `+<calling code><national number>` candidate and turns
//! every failure into a `false` verdict.

use rlibphonenumber::{PhoneNumber, PhoneNumberFormat, PHONE_NUMBER_UTIL};
use tracing::debug;

use crate::country::{NormalizedCountry, RawCountryRecord};
use crate::error::PhoneError;

/// Numbering-plan operations the validator relies on.
pub trait NumberingPlan {
    type Number;

    fn parse(&self, full_number: &str, region_code: &str) -> Result<Self::Number, PhoneError>;
    fn is_valid_number(&self, number: &Self::Number) -> bool;
    fn is_possible_number(&self, number: &Self::Number) -> bool;
    fn format_e164(&self, number: &Self::Number) -> String;
}

/// [`NumberingPlan`] backed by libphonenumber metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumber;

impl NumberingPlan for LibPhoneNumber {
    type Number = PhoneNumber;

    fn parse(&self, full_number: &str, region_code: &str) -> Result<PhoneNumber, PhoneError> {
        PHONE_NUMBER_UTIL
            .parse(full_number, region_code)
            .map_err(|err| PhoneError::Parse {
                number: full_number.to_string(),
                region: region_code.to_string(),
                reason: format!("{:?}", err),
            })
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        PHONE_NUMBER_UTIL.is_valid_number(number)
    }

    fn is_possible_number(&self, number: &PhoneNumber) -> bool {
        PHONE_NUMBER_UTIL.is_possible_number(number)
    }

    fn format_e164(&self, number: &PhoneNumber) -> String {
        PHONE_NUMBER_UTIL
            .format(number, PhoneNumberFormat::E164)
            .into_owned()
    }
}

/// Anything that identifies where a national number should be dialed.
pub trait DialTarget {
    fn region_code(&self) -> &str;
    /// Canonical calling code, `""` when unknown.
    fn calling_code(&self) -> &str;
}

impl DialTarget for NormalizedCountry {
    fn region_code(&self) -> &str {
        &self.region_code
    }

    fn calling_code(&self) -> &str {
        &self.calling_code
    }
}

/// A raw dataset entry together with its region code.
impl<'a> DialTarget for (&'a str, &'a RawCountryRecord) {
    fn region_code(&self) -> &str {
        self.0
    }

    fn calling_code(&self) -> &str {
        self.1.primary_calling_code()
    }
}

impl<T: DialTarget + ?Sized> DialTarget for &T {
    fn region_code(&self) -> &str {
        (**self).region_code()
    }

    fn calling_code(&self) -> &str {
        (**self).calling_code()
    }
}

/// Transient tuple handed to the numbering plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneValidationInput {
    pub national_number_digits: String,
    pub region_code: String,
    pub calling_code: String,
}

impl PhoneValidationInput {
    /// Build the input, or `None` when any component is missing.
    pub fn new(national_number_digits: &str, target: &impl DialTarget) -> Option<Self> {
        let region_code = target.region_code().trim();
        let calling_code = target.calling_code().trim();
        if national_number_digits.is_empty() || region_code.is_empty() || calling_code.is_empty() {
            return None;
        }
        Some(Self {
            national_number_digits: national_number_digits.to_string(),
            region_code: region_code.to_string(),
            calling_code: calling_code.to_string(),
        })
    }

    /// `+<calling code><national number>`
    pub fn full_number(&self) -> String {
        format!("+{}{}", self.calling_code, self.national_number_digits)
    }
}

impl DialTarget for PhoneValidationInput {
    fn region_code(&self) -> &str {
        &self.region_code
    }

    fn calling_code(&self) -> &str {
        &self.calling_code
    }
}

/// Boolean oracle over a [`NumberingPlan`]. Never returns an error.
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator<P = LibPhoneNumber> {
    plan: P,
}

impl<P: NumberingPlan> PhoneValidator<P> {
    pub fn new(plan: P) -> Self {
        Self { plan }
    }

    fn parse(&self, national_number_digits: &str, target: &impl DialTarget) -> Option<P::Number> {
        let input = PhoneValidationInput::new(national_number_digits, target)?;
        match self.plan.parse(&input.full_number(), &input.region_code) {
            Ok(number) => Some(number),
            Err(err) => {
                debug!(error = %err, "rejected phone candidate");
                None
            }
        }
    }

    /// Whether the number is valid for the target's region.
    pub fn is_valid(&self, national_number_digits: &str, target: &impl DialTarget) -> bool {
        self.parse(national_number_digits, target)
            .is_some_and(|number| self.plan.is_valid_number(&number))
    }

    /// Whether the number has a plausible length for the target's region,
    /// without full validation.
    pub fn is_possible(&self, national_number_digits: &str, target: &impl DialTarget) -> bool {
        self.parse(national_number_digits, target)
            .is_some_and(|number| self.plan.is_possible_number(&number))
    }

    /// E.164 form of a valid number; `None` otherwise.
    pub fn format_e164(&self, national_number_digits: &str, target: &impl DialTarget) -> Option<String> {
        self.parse(national_number_digits, target)
            .filter(|number| self.plan.is_valid_number(number))
            .map(|number| self.plan.format_e164(&number))
    }
}

pub fn is_valid_phone_number(national_number_digits: &str, target: &impl DialTarget) -> bool {
    PhoneValidator::<LibPhoneNumber>::default().is_valid(national_number_digits, target)
}

pub fn is_possible_phone_number(national_number_digits: &str, target: &impl DialTarget) -> bool {
    PhoneValidator::<LibPhoneNumber>::default().is_possible(national_number_digits, target)
}
