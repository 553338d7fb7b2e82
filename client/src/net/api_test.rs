use super::*;

fn client() -> ApiClient {
    ApiClient::new("https://api.example.com/")
}

#[test]
fn new_trims_trailing_slash() {
    assert_eq!(client().base_url(), "https://api.example.com");
}

#[test]
fn tutor_urls_format_expected_paths() {
    let api = client();
    assert_eq!(api.tutors_url(), "https://api.example.com/tutors");
    assert_eq!(api.tutor_url("665f1c"), "https://api.example.com/tutors/665f1c");
    assert_eq!(api.tutor_review_url("665f1c"), "https://api.example.com/tutors/review/665f1c");
}

#[test]
fn tutors_by_owner_url_encodes_email() {
    assert_eq!(
        client().tutors_by_owner_url("bob+tutor@example.com"),
        "https://api.example.com/tutors?email=bob%2Btutor%40example.com"
    );
}

#[test]
fn booking_urls_format_expected_paths() {
    let api = client();
    assert_eq!(api.bookings_url(), "https://api.example.com/bookings");
    assert_eq!(api.bookings_for_url("a@b.com"), "https://api.example.com/bookings/a%40b.com");
    assert_eq!(api.booking_reviewed_url("b-7"), "https://api.example.com/bookings/reviewed/b-7");
}

#[test]
fn categories_url_formats_expected_path() {
    assert_eq!(client().categories_url(), "https://api.example.com/categories");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let api = client();
    assert_eq!(futures::executor::block_on(api.fetch_tutors()), Err(ApiError::Unavailable));
    assert_eq!(
        futures::executor::block_on(api.submit_review("t-1", "b-1")),
        Err(ApiError::Unavailable)
    );
}
