use super::*;
use gyms::ApiResponse;

fn filled() -> GymFormState {
    let mut form = GymFormState::create();
    form.fields = GymFields {
        title: "Fitness Plus".to_owned(),
        description: "Open daily".to_owned(),
        phone: "(11) 98765-4321".to_owned(),
        latitude: "-23.55".to_owned(),
        longitude: "-46.63".to_owned(),
    };
    form
}

fn existing() -> Gym {
    Gym {
        id: "g1".to_owned(),
        title: "Iron Temple".to_owned(),
        description: "Heavy".to_owned(),
        phone: "11987654321".to_owned(),
        latitude: 1.5,
        longitude: 2.5,
        created_at: None,
    }
}

#[test]
fn wizard_blocks_on_invalid_details() {
    let mut form = GymFormState::create();
    assert!(!form.next_step());
    assert_eq!(form.step, WizardStep::Details);
    assert_eq!(form.error.as_deref(), Some("Title is required"));
}

#[test]
fn wizard_walks_all_steps() {
    let mut form = filled();
    assert!(form.next_step());
    assert_eq!(form.step, WizardStep::Contact);
    assert!(form.next_step());
    assert_eq!(form.step, WizardStep::Location);
    assert!(form.is_last_step());
    assert!(!form.next_step());
    form.prev_step();
    assert_eq!(form.step, WizardStep::Contact);
}

#[test]
fn contact_step_requires_eleven_digits() {
    let mut form = filled();
    form.fields.phone = "1234".to_owned();
    form.next_step();
    assert!(!form.next_step());
    assert_eq!(form.error.as_deref(), Some("Phone number must have 11 digits including area code"));
}

#[test]
fn edit_form_is_single_page_prefilled() {
    let form = GymFormState::edit(&existing());
    assert!(!form.is_wizard());
    assert!(form.is_last_step());
    assert_eq!(form.fields.title, "Iron Temple");
    assert_eq!(form.coordinates(), Some(Coordinates::new(1.5, 2.5)));
}

#[test]
fn begin_submit_validates_before_sending() {
    let mut form = filled();
    form.fields.title = "x".repeat(201);
    assert_eq!(form.begin_submit(), None);
    assert!(!form.submitting);
    assert_eq!(form.error.as_deref(), Some("Title must be 200 characters or less"));
}

#[test]
fn begin_submit_refuses_while_in_flight() {
    let mut form = filled();
    let req = form.begin_submit().expect("valid");
    assert_eq!(req.mode, FormMode::Create);
    assert_eq!(req.draft.phone, "11987654321");
    assert!(form.submitting);
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn finish_submit_success_returns_saved_gym() {
    let mut form = filled();
    form.begin_submit();
    let outcome = form.finish_submit(Ok(existing()));
    assert_eq!(outcome, SubmitOutcome::Saved(existing()));
    assert!(!form.submitting);
}

#[test]
fn finish_submit_failure_shows_backend_message() {
    let mut form = GymFormState::edit(&existing());
    form.begin_submit();
    let err = ApiError::from_response(&ApiResponse::new(400, r#"{"message":"Duplicate title"}"#), "x");
    assert_eq!(form.finish_submit(Err(err)), SubmitOutcome::Failed);
    assert_eq!(form.error.as_deref(), Some("Failed to update gym: Duplicate title"));
}

#[test]
fn finish_submit_unauthorized_is_session_expiry() {
    let mut form = filled();
    form.begin_submit();
    let err = ApiError::from_response(&ApiResponse::new(401, ""), "x");
    assert_eq!(form.finish_submit(Err(err)), SubmitOutcome::SessionExpired);
}

#[test]
fn set_location_formats_coordinates() {
    let mut form = GymFormState::create();
    form.set_location(Coordinates::new(-23.550_5, -46.633_3));
    assert_eq!(form.fields.latitude, "-23.5505");
    assert_eq!(form.fields.longitude, "-46.6333");
    form.set_location(Coordinates::new(0.0, 10.0));
    assert_eq!(form.fields.latitude, "0");
    assert_eq!(form.fields.longitude, "10");
}
