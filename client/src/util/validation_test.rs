use super::*;

fn filled_form() -> TutorForm {
    TutorForm {
        tutor_name: " Marta Ruiz ".to_owned(),
        tutor_email: "marta@tutors.com".to_owned(),
        image: "https://example.com/marta.jpg".to_owned(),
        language: "spanish".to_owned(),
        price: "30".to_owned(),
        description: "Conversation practice".to_owned(),
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn validate_login_trims_email() {
    assert_eq!(
        validate_login("  a@b.com ", "secret1"),
        Ok(Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() })
    );
}

#[test]
fn validate_login_requires_fields() {
    assert_eq!(validate_login("   ", "secret1"), Err("Email is required"));
    assert_eq!(validate_login("a@b.com", ""), Err("Password is required"));
}

#[test]
fn validate_login_enforces_min_length() {
    assert_eq!(validate_login("a@b.com", "12345"), Err("Minimum 6 characters required"));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn password_strength_needs_both_cases_and_length() {
    assert!(password_is_strong("Abcdef"));
    assert!(!password_is_strong("abcdef"));
    assert!(!password_is_strong("ABCDEF"));
    assert!(!password_is_strong("Abcde"));
}

#[test]
fn validate_registration_builds_request() {
    let reg = validate_registration(" Bob ", "bob@example.com", "Secret1", " https://img/bob.png ").unwrap();
    assert_eq!(reg.display_name, "Bob");
    assert_eq!(reg.avatar_url.as_deref(), Some("https://img/bob.png"));
}

#[test]
fn validate_registration_blank_photo_means_no_avatar() {
    let reg = validate_registration("Bob", "bob@example.com", "Secret1", "  ").unwrap();
    assert_eq!(reg.avatar_url, None);
}

#[test]
fn validate_registration_rejects_weak_password() {
    assert_eq!(
        validate_registration("Bob", "bob@example.com", "secret1", ""),
        Err("Password must contain uppercase, lowercase and be 6+ characters.")
    );
}

// =============================================================
// Tutor form
// =============================================================

#[test]
fn tutor_form_normalizes_language_and_trims() {
    let draft = filled_form().validate().unwrap();
    assert_eq!(draft.language, "Spanish");
    assert_eq!(draft.tutor_name, "Marta Ruiz");
    assert!((draft.price - 30.0).abs() < f64::EPSILON);
}

#[test]
fn tutor_form_requires_every_field() {
    let mut form = filled_form();
    form.image = "  ".to_owned();
    assert_eq!(form.validate(), Err("Image URL is required"));
}

#[test]
fn tutor_form_rejects_unknown_language() {
    let mut form = filled_form();
    form.language = "Klingon".to_owned();
    assert_eq!(form.validate(), Err("Select a language"));
}

#[test]
fn tutor_form_rejects_bad_price() {
    for price in ["", "abc", "-5", "NaN", "inf"] {
        let mut form = filled_form();
        form.price = price.to_owned();
        assert_eq!(form.validate(), Err("Price must be a non-negative number"), "price {price:?}");
    }
}

#[test]
fn tutor_form_from_draft_round_trips_through_validate() {
    let draft = filled_form().validate().unwrap();
    assert_eq!(TutorForm::from_draft(&draft).validate(), Ok(draft));
}
