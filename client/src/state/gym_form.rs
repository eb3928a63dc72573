//! Gym create/edit form state.
//!
//! Create mode walks a three-step wizard (details, contact, location) and
//! checks each step's fields before moving on. Edit mode is one page
//! prefilled from the gym. Both submit through [`GymFormState::begin_submit`],
//! which validates everything and refuses while a request is in flight.

#[cfg(test)]
#[path = "gym_form_test.rs"]
mod gym_form_test;

use gyms::geocode::Coordinates;
use gyms::validate::{LATITUDE_LIMIT, LONGITUDE_LIMIT, parse_coordinate};
use gyms::{ApiError, Gym, GymDraft, GymFields};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { gym_id: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Details,
    Contact,
    Location,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Details, Self::Contact, Self::Location];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Details => "Gym details",
            Self::Contact => "Contact",
            Self::Location => "Location",
        }
    }

    /// One-based position for the step indicator.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Details => 1,
            Self::Contact => 2,
            Self::Location => 3,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Details => Some(Self::Contact),
            Self::Contact => Some(Self::Location),
            Self::Location => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::Details => None,
            Self::Contact => Some(Self::Details),
            Self::Location => Some(Self::Contact),
        }
    }
}

/// A validated submission ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitRequest {
    pub mode: FormMode,
    pub draft: GymDraft,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Close the form and restart the list from page 1.
    Saved(Gym),
    Failed,
    SessionExpired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GymFormState {
    pub mode: FormMode,
    pub step: WizardStep,
    pub fields: GymFields,
    pub submitting: bool,
    pub error: Option<String>,
}

impl GymFormState {
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            step: WizardStep::Details,
            fields: GymFields::default(),
            submitting: false,
            error: None,
        }
    }

    #[must_use]
    pub fn edit(gym: &Gym) -> Self {
        Self {
            mode: FormMode::Edit { gym_id: gym.id.clone() },
            step: WizardStep::Location,
            fields: GymFields::from_gym(gym),
            submitting: false,
            error: None,
        }
    }

    #[must_use]
    pub fn is_wizard(&self) -> bool {
        self.mode == FormMode::Create
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        !self.is_wizard() || self.step == WizardStep::Location
    }

    fn action(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "create gym",
            FormMode::Edit { .. } => "update gym",
        }
    }

    /// Advance the wizard if the current step's fields pass.
    pub fn next_step(&mut self) -> bool {
        let check = match self.step {
            WizardStep::Details => self.fields.check_details(),
            WizardStep::Contact => self.fields.check_contact(),
            WizardStep::Location => return false,
        };
        if let Err(rule) = check {
            self.error = Some(rule.to_string());
            return false;
        }
        self.error = None;
        self.step = self.step.next().unwrap_or(self.step);
        true
    }

    pub fn prev_step(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            self.error = None;
        }
    }

    /// Coordinates currently typed into the form, if both parse.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = parse_coordinate(&self.fields.latitude, LATITUDE_LIMIT)?;
        let lng = parse_coordinate(&self.fields.longitude, LONGITUDE_LIMIT)?;
        Some(Coordinates::new(lat, lng))
    }

    /// Take coordinates committed by the map selector.
    pub fn set_location(&mut self, coords: Coordinates) {
        self.fields.latitude = format_coordinate(coords.lat);
        self.fields.longitude = format_coordinate(coords.lng);
    }

    /// Validate and mark the form as submitting.
    ///
    /// Returns `None` when a submit is already running or validation fails;
    /// in the latter case `error` holds the first failing rule.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.submitting {
            return None;
        }
        match self.fields.validate() {
            Ok(draft) => {
                self.submitting = true;
                self.error = None;
                Some(SubmitRequest { mode: self.mode.clone(), draft })
            }
            Err(rule) => {
                self.error = Some(rule.to_string());
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<Gym, ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(gym) => {
                self.error = None;
                SubmitOutcome::Saved(gym)
            }
            Err(e) => {
                self.error = Some(e.user_message(self.action()));
                if e.is_session_expired() { SubmitOutcome::SessionExpired } else { SubmitOutcome::Failed }
            }
        }
    }
}

fn format_coordinate(value: f64) -> String {
    let text = format!("{value:.6}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_owned() } else { text.to_owned() }
}
