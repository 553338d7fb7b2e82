use std::cell::RefCell;
use std::sync::Arc;

use super::*;
use crate::net::identity::MemoryIdentitySource;
use crate::net::types::UserIdentity;
use crate::state::auth::AuthStateHolder;

fn alice() -> UserIdentity {
    UserIdentity {
        id: "u1".to_owned(),
        display_name: Some("Alice".to_owned()),
        email: "alice@example.com".to_owned(),
        avatar_url: None,
    }
}

const PROTECTED_PATHS: [&str; 5] = ["/bookings", "/add-tutor", "/my-tutors", "/tutor/665f1c", "/update-tutor/9"];

// =============================================================
// evaluate
// =============================================================

#[test]
fn loading_always_yields_placeholder() {
    for user in [None, Some(alice())] {
        let state = AuthState { user, status: SessionStatus::Loading };
        for path in PROTECTED_PATHS {
            assert_eq!(evaluate(&state, path), GateOutcome::Placeholder, "path {path}");
        }
    }
}

#[test]
fn resolved_with_user_always_renders() {
    let state = AuthState::resolved(Some(alice()));
    for path in PROTECTED_PATHS {
        assert_eq!(evaluate(&state, path), GateOutcome::Render, "path {path}");
    }
}

#[test]
fn resolved_without_user_redirects_with_attempted_path() {
    let state = AuthState::resolved(None);
    for path in PROTECTED_PATHS {
        match evaluate(&state, path) {
            GateOutcome::Redirect(intent) => {
                assert_eq!(intent.origin_path(), path);
                assert_eq!(intent.target_path(), LOGIN_PATH);
            }
            other => panic!("expected redirect for {path}, got {other:?}"),
        }
    }
}

#[test]
fn outcome_phases_map_one_to_one() {
    assert_eq!(GateOutcome::Placeholder.phase(), GatePhase::Pending);
    assert_eq!(GateOutcome::Render.phase(), GatePhase::Authorized);
    assert_eq!(GateOutcome::Redirect(NavigationIntent::to_login("/x")).phase(), GatePhase::Denied);
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn sign_out_on_protected_view_goes_authorized_to_denied() {
    let signed_in = evaluate(&AuthState::resolved(Some(alice())), "/bookings");
    let signed_out = evaluate(&AuthState::resolved(None), "/bookings");
    assert_eq!(signed_in.phase(), GatePhase::Authorized);
    assert_eq!(signed_out.phase(), GatePhase::Denied);
    assert_eq!(signed_out, GateOutcome::Redirect(NavigationIntent::to_login("/bookings")));
}

#[test]
fn rapid_resolution_sequence_settles_on_final_state() {
    let sequence = [
        AuthState::default(),
        AuthState::resolved(None),
        AuthState::resolved(Some(alice())),
    ];
    let phases: Vec<GatePhase> = sequence.iter().map(|s| evaluate(s, "/bookings").phase()).collect();
    assert_eq!(phases, vec![GatePhase::Pending, GatePhase::Denied, GatePhase::Authorized]);
    assert_eq!(evaluate(sequence.last().unwrap(), "/bookings"), GateOutcome::Render);
}

// =============================================================
// NavigationIntent
// =============================================================

#[test]
fn intent_href_encodes_origin() {
    let intent = NavigationIntent::to_login("/tutor/42");
    assert_eq!(intent.href(), "/login?from=%2Ftutor%2F42");
}

// =============================================================
// return_path / post_login_destination
// =============================================================

#[test]
fn return_path_defaults_to_home() {
    assert_eq!(return_path(None), "/");
    assert_eq!(return_path(Some("   ")), "/");
}

#[test]
fn return_path_keeps_local_paths() {
    assert_eq!(return_path(Some("/bookings")), "/bookings");
    assert_eq!(return_path(Some("/find-tutors/spanish?x=1")), "/find-tutors/spanish?x=1");
}

#[test]
fn return_path_rejects_external_targets() {
    assert_eq!(return_path(Some("https://evil.example.com")), "/");
    assert_eq!(return_path(Some("//evil.example.com")), "/");
    assert_eq!(return_path(Some("/\\evil.example.com")), "/");
    assert_eq!(return_path(Some("bookings")), "/");
}

#[test]
fn return_path_never_loops_back_to_login() {
    assert_eq!(return_path(Some("/login")), "/");
    assert_eq!(return_path(Some("/login?from=/bookings")), "/");
    assert_eq!(return_path(Some("/register")), "/");
}

#[test]
fn sign_in_on_login_returns_to_remembered_origin() {
    let state = AuthState::resolved(Some(alice()));
    assert_eq!(post_login_destination(&state, Some("/bookings")), Some("/bookings".to_owned()));
}

#[test]
fn no_post_login_navigation_until_signed_in() {
    assert_eq!(post_login_destination(&AuthState::default(), Some("/bookings")), None);
    assert_eq!(post_login_destination(&AuthState::resolved(None), Some("/bookings")), None);
}

#[test]
fn auth_page_href_carries_origin_between_login_and_register() {
    assert_eq!(auth_page_href("/login", Some("/bookings")), "/login?from=%2Fbookings");
    assert_eq!(auth_page_href("/register", Some("/tutor/42")), "/register?from=%2Ftutor%2F42");
    assert_eq!(auth_page_href("/login", None), "/login");
    assert_eq!(auth_page_href("/login", Some("")), "/login");
}

#[test]
fn federated_return_to_joins_origin_and_sanitized_path() {
    assert_eq!(
        federated_return_to("https://edubridge.example/", Some("/bookings")),
        "https://edubridge.example/bookings"
    );
    assert_eq!(
        federated_return_to("https://edubridge.example", Some("//evil.example.com")),
        "https://edubridge.example/"
    );
}

// =============================================================
// Reactive session flow
// =============================================================

fn with_session(test: impl FnOnce(&MemoryIdentitySource, &AuthStateHolder)) {
    let owner = Owner::new();
    owner.with(|| {
        let source = Arc::new(MemoryIdentitySource::new());
        let holder = AuthStateHolder::new(source.clone());
        holder.subscribe();
        test(&source, &holder);
    });
}

fn recording_navigate(calls: &RefCell<Vec<(String, bool)>>) -> impl Fn(&str, NavigateOptions) + '_ {
    move |path, options| calls.borrow_mut().push((path.to_owned(), options.replace))
}

#[test]
fn gate_follows_session_through_sign_out_and_sign_in() {
    with_session(|source, holder| {
        let path = RwSignal::new("/bookings".to_owned());
        let outcome = gate_outcome(holder.state(), path.into());
        assert_eq!(outcome.get_untracked(), GateOutcome::Placeholder);

        source.emit(Some(alice()));
        assert_eq!(outcome.get_untracked(), GateOutcome::Render);

        source.emit(None);
        assert_eq!(
            outcome.get_untracked(),
            GateOutcome::Redirect(NavigationIntent::to_login("/bookings"))
        );

        source.emit(Some(alice()));
        assert_eq!(outcome.get_untracked(), GateOutcome::Render);
    });
}

#[test]
fn gate_settles_on_final_state_after_rapid_resolution() {
    with_session(|source, holder| {
        let path = RwSignal::new("/my-tutors".to_owned());
        let outcome = gate_outcome(holder.state(), path.into());
        source.emit(None);
        source.emit(Some(alice()));
        assert_eq!(outcome.get_untracked(), GateOutcome::Render);
    });
}

#[test]
fn gate_redirect_tracks_current_path() {
    with_session(|source, holder| {
        let path = RwSignal::new("/bookings".to_owned());
        let outcome = gate_outcome(holder.state(), path.into());
        source.emit(None);
        path.set("/tutor/7".to_owned());
        assert_eq!(outcome.get_untracked(), GateOutcome::Redirect(NavigationIntent::to_login("/tutor/7")));
    });
}

#[test]
fn login_return_navigates_only_after_sign_in() {
    with_session(|source, holder| {
        let from = Memo::new(|_| Some("/bookings".to_owned()));
        let target = login_return_target(holder.state(), from);
        let calls = RefCell::new(Vec::new());
        let navigate = recording_navigate(&calls);

        assert!(!follow_login_return(target.get_untracked().as_deref(), &navigate));
        source.emit(None);
        assert!(!follow_login_return(target.get_untracked().as_deref(), &navigate));
        assert!(calls.borrow().is_empty());

        source.emit(Some(alice()));
        assert!(follow_login_return(target.get_untracked().as_deref(), &navigate));
        assert_eq!(*calls.borrow(), vec![("/bookings".to_owned(), true)]);
    });
}

#[test]
fn login_return_without_origin_goes_home() {
    with_session(|source, holder| {
        let from = Memo::new(|_| None::<String>);
        let target = login_return_target(holder.state(), from);
        source.emit(Some(alice()));
        assert_eq!(target.get_untracked().as_deref(), Some("/"));
    });
}
