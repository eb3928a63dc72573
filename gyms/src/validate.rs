//! Client-side validation for gym create/edit forms.
//!
//! Rules run in a fixed order and the first failure wins, so the form can
//! show exactly one message. Nothing that fails here is ever sent.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::types::{Gym, GymDraft};

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;
pub const PHONE_DIGITS: usize = 11;
pub const LATITUDE_LIMIT: f64 = 90.0;
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// A rule a gym form failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleMissing,
    #[error("Title must be 200 characters or less")]
    TitleTooLong,
    #[error("Description is required")]
    DescriptionMissing,
    #[error("Description must be 2000 characters or less")]
    DescriptionTooLong,
    #[error("Phone number must have 11 digits including area code")]
    PhoneDigits,
    #[error("Valid latitude is required (between -90 and 90)")]
    Latitude,
    #[error("Valid longitude is required (between -180 and 180)")]
    Longitude,
}

/// Raw, unvalidated gym form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GymFields {
    pub title: String,
    pub description: String,
    pub phone: String,
    pub latitude: String,
    pub longitude: String,
}

impl GymFields {
    /// Prefill fields from an existing gym for the edit form.
    #[must_use]
    pub fn from_gym(gym: &Gym) -> Self {
        Self {
            title: gym.title.clone(),
            description: gym.description.clone(),
            phone: gym.phone.clone(),
            latitude: gym.latitude.to_string(),
            longitude: gym.longitude.to_string(),
        }
    }

    /// Check title and description only (first wizard step).
    ///
    /// # Errors
    ///
    /// Returns the first failing title/description rule.
    pub fn check_details(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleMissing);
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(ValidationError::TitleTooLong);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::DescriptionMissing);
        }
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong);
        }
        Ok(())
    }

    /// Check the phone number only (second wizard step).
    ///
    /// # Errors
    ///
    /// [`ValidationError::PhoneDigits`] unless exactly eleven digits remain
    /// after stripping the mask.
    pub fn check_contact(&self) -> Result<(), ValidationError> {
        if strip_phone_digits(&self.phone).len() == PHONE_DIGITS {
            Ok(())
        } else {
            Err(ValidationError::PhoneDigits)
        }
    }

    /// Validate every field and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the first rule that fails, in form order.
    pub fn validate(&self) -> Result<GymDraft, ValidationError> {
        self.check_details()?;
        self.check_contact()?;
        let latitude = parse_coordinate(&self.latitude, LATITUDE_LIMIT).ok_or(ValidationError::Latitude)?;
        let longitude = parse_coordinate(&self.longitude, LONGITUDE_LIMIT).ok_or(ValidationError::Longitude)?;

        Ok(GymDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            phone: strip_phone_digits(&self.phone),
            latitude,
            longitude,
        })
    }
}

/// Keep only ASCII digits from a phone input (mask characters, spaces, dashes dropped).
#[must_use]
pub fn strip_phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parse a coordinate and check `|value| <= limit`.
///
/// Returns `None` for empty, non-numeric, non-finite, or out-of-range input.
#[must_use]
pub fn parse_coordinate(raw: &str, limit: f64) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value.abs() <= limit).then_some(value)
}

/// Render phone digits with the `(##) #####-####` display mask.
///
/// Input that does not hold exactly eleven digits is returned unchanged.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = strip_phone_digits(raw);
    if digits.len() != PHONE_DIGITS {
        return raw.to_owned();
    }
    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
}
