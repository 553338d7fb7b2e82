use super::*;

fn booking(id: &str, reviewed: bool) -> Booking {
    Booking {
        id: id.to_owned(),
        tutor_id: format!("t-{id}"),
        image: String::new(),
        language: "Spanish".to_owned(),
        price: 20.0,
        tutor_email: "tutor@example.com".to_owned(),
        email: "alice@example.com".to_owned(),
        booked_at: None,
        reviewed,
    }
}

fn state_with(items: Vec<Booking>) -> BookingsState {
    let mut state = BookingsState { loading: true, ..BookingsState::default() };
    state.loaded(items);
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loaded_clears_loading_and_error() {
    let mut state = BookingsState { loading: true, error: Some("old".to_owned()), ..BookingsState::default() };
    state.loaded(vec![booking("b1", false)]);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn failed_records_message_and_clears_in_flight_review() {
    let mut state = state_with(vec![booking("b1", false)]);
    assert!(state.begin_review("b1"));
    state.failed("request failed: 500".to_owned());
    assert!(state.reviewing.is_none());
    assert_eq!(state.error.as_deref(), Some("request failed: 500"));
    assert!(!state.items[0].reviewed);
}

// =============================================================
// Reviews
// =============================================================

#[test]
fn begin_review_rejects_reviewed_unknown_and_concurrent() {
    let mut state = state_with(vec![booking("b1", false), booking("b2", true), booking("b3", false)]);
    assert!(!state.begin_review("b2"));
    assert!(!state.begin_review("missing"));
    assert!(state.begin_review("b1"));
    assert!(!state.begin_review("b3"));
}

#[test]
fn mark_reviewed_flags_only_target_booking() {
    let mut state = state_with(vec![booking("b1", false), booking("b2", false)]);
    state.begin_review("b2");
    assert!(state.mark_reviewed("b2"));
    assert!(state.reviewing.is_none());
    assert!(!state.items[0].reviewed);
    assert!(state.items[1].reviewed);
}

#[test]
fn mark_reviewed_is_idempotent() {
    let mut state = state_with(vec![booking("b1", false)]);
    assert!(state.mark_reviewed("b1"));
    assert!(!state.mark_reviewed("b1"));
    assert!(!state.mark_reviewed("missing"));
}
