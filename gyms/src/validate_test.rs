use super::*;

fn valid_fields() -> GymFields {
    GymFields {
        title: "Fitness Plus".to_owned(),
        description: "Weights, cardio and classes.".to_owned(),
        phone: "(11) 98765-4321".to_owned(),
        latitude: "-23.5505".to_owned(),
        longitude: "-46.6333".to_owned(),
    }
}

#[test]
fn valid_fields_build_draft_with_stripped_phone() {
    let draft = valid_fields().validate().expect("valid");
    assert_eq!(draft.phone, "11987654321");
    assert!((draft.latitude - -23.5505).abs() < f64::EPSILON);
    assert!((draft.longitude - -46.6333).abs() < f64::EPSILON);
}

#[test]
fn phone_accepts_exactly_eleven_digits() {
    for phone in ["11987654321", "(11) 98765-4321", "11 9 8765 4321"] {
        let fields = GymFields { phone: phone.to_owned(), ..valid_fields() };
        assert!(fields.validate().is_ok(), "expected {phone:?} to pass");
    }
}

#[test]
fn phone_rejects_other_digit_counts() {
    for phone in ["", "1198765432", "119876543210", "(11) 9876-432", "abc"] {
        let fields = GymFields { phone: phone.to_owned(), ..valid_fields() };
        assert_eq!(fields.validate(), Err(ValidationError::PhoneDigits), "expected {phone:?} to fail");
    }
}

#[test]
fn latitude_rejects_out_of_range_and_non_numeric() {
    for lat in ["", "abc", "90.0001", "-91", "NaN", "inf"] {
        let fields = GymFields { latitude: lat.to_owned(), ..valid_fields() };
        assert_eq!(fields.validate(), Err(ValidationError::Latitude), "expected {lat:?} to fail");
    }
}

#[test]
fn latitude_accepts_boundaries() {
    for lat in ["90", "-90", "0"] {
        let fields = GymFields { latitude: lat.to_owned(), ..valid_fields() };
        assert!(fields.validate().is_ok(), "expected {lat:?} to pass");
    }
}

#[test]
fn longitude_rejects_out_of_range_and_non_numeric() {
    for lng in ["", "east", "180.5", "-181"] {
        let fields = GymFields { longitude: lng.to_owned(), ..valid_fields() };
        assert_eq!(fields.validate(), Err(ValidationError::Longitude), "expected {lng:?} to fail");
    }
}

#[test]
fn title_length_limit_counts_characters() {
    let at_limit = GymFields { title: "é".repeat(200), ..valid_fields() };
    assert!(at_limit.validate().is_ok());
    let over = GymFields { title: "a".repeat(201), ..valid_fields() };
    assert_eq!(over.validate(), Err(ValidationError::TitleTooLong));
}

#[test]
fn description_over_limit_is_rejected() {
    let over = GymFields { description: "d".repeat(2001), ..valid_fields() };
    assert_eq!(over.validate(), Err(ValidationError::DescriptionTooLong));
}

#[test]
fn blank_fields_report_first_failing_rule() {
    let fields = GymFields { title: "   ".to_owned(), description: String::new(), ..valid_fields() };
    assert_eq!(fields.validate(), Err(ValidationError::TitleMissing));
    let fields = GymFields { description: " ".to_owned(), phone: String::new(), ..valid_fields() };
    assert_eq!(fields.validate(), Err(ValidationError::DescriptionMissing));
}

#[test]
fn validation_messages_match_form_copy() {
    assert_eq!(ValidationError::TitleTooLong.to_string(), "Title must be 200 characters or less");
    assert_eq!(
        ValidationError::Longitude.to_string(),
        "Valid longitude is required (between -180 and 180)"
    );
}

#[test]
fn from_gym_prefills_coordinates_as_text() {
    let gym = Gym {
        id: "g1".to_owned(),
        title: "T".to_owned(),
        description: "D".to_owned(),
        phone: "11987654321".to_owned(),
        latitude: -23.5,
        longitude: 10.0,
        created_at: None,
    };
    let fields = GymFields::from_gym(&gym);
    assert_eq!(fields.latitude, "-23.5");
    assert_eq!(fields.longitude, "10");
}

#[test]
fn format_phone_applies_mask() {
    assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    assert_eq!(format_phone("123"), "123");
}

#[test]
fn step_checks_cover_only_their_fields() {
    let fields = GymFields { title: "Gym".to_owned(), description: "Open".to_owned(), ..GymFields::default() };
    assert_eq!(fields.check_details(), Ok(()));
    assert_eq!(fields.check_contact(), Err(ValidationError::PhoneDigits));

    let fields = GymFields { phone: "(11) 98765-4321".to_owned(), ..GymFields::default() };
    assert_eq!(fields.check_contact(), Ok(()));
    assert_eq!(fields.check_details(), Err(ValidationError::TitleMissing));
}
