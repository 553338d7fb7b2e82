use std::sync::atomic::AtomicUsize;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn alice() -> UserIdentity {
    UserIdentity {
        id: "u-alice".to_owned(),
        display_name: Some("Alice".to_owned()),
        email: "alice@example.com".to_owned(),
        avatar_url: None,
    }
}

fn counting_listener(count: &Arc<AtomicUsize>) -> Listener {
    let count = Arc::clone(count);
    Arc::new(move |_user| {
        count.fetch_add(1, Ordering::SeqCst);
    })
}

// =============================================================
// Subscription / ListenerSet
// =============================================================

#[test]
fn dropping_subscription_releases_listener() {
    let source = MemoryIdentitySource::new();
    let count = Arc::new(AtomicUsize::new(0));
    let sub = source.on_change(counting_listener(&count));
    assert_eq!(source.listener_count(), 1);
    drop(sub);
    assert_eq!(source.listener_count(), 0);
    assert_eq!(source.emit(Some(alice())), 0);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn unsubscribe_releases_only_its_own_listener() {
    let source = MemoryIdentitySource::new();
    let count = Arc::new(AtomicUsize::new(0));
    let first = source.on_change(counting_listener(&count));
    let _second = source.on_change(counting_listener(&count));
    first.unsubscribe();
    assert_eq!(source.emit(None), 1);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_ids_are_unique() {
    let source = MemoryIdentitySource::new();
    let a = source.on_change(Arc::new(|_| {}));
    let b = source.on_change(Arc::new(|_| {}));
    assert_ne!(a.id(), b.id());
}

#[test]
fn subscription_outliving_set_releases_quietly() {
    let set = Arc::new(ListenerSet::default());
    let sub = set.add(Arc::new(|_| {}));
    drop(set);
    drop(sub);
}

#[test]
fn listener_can_unsubscribe_during_notify() {
    let set = Arc::new(ListenerSet::default());
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let slot_in_listener = Arc::clone(&slot);
    let sub = set.add(Arc::new(move |_| {
        slot_in_listener.lock().unwrap().take();
    }));
    *slot.lock().unwrap() = Some(sub);
    assert_eq!(set.notify(&None), 1);
    assert!(set.is_empty());
}

// =============================================================
// MemoryIdentitySource
// =============================================================

#[test]
fn emit_updates_snapshot_and_delivers_user() {
    let source = MemoryIdentitySource::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_listener = Arc::clone(&seen);
    let _sub = source.on_change(Arc::new(move |user| seen_in_listener.lock().unwrap().push(user)));

    source.emit(Some(alice()));
    assert_eq!(source.current_user(), Some(alice()));
    source.emit(None);
    assert_eq!(source.current_user(), None);
    assert_eq!(*seen.lock().unwrap(), vec![Some(alice()), None]);
}

#[test]
fn sign_in_with_seeded_account_notifies() {
    let source = MemoryIdentitySource::new().with_account(alice(), "Secret1");
    let count = Arc::new(AtomicUsize::new(0));
    let _sub = source.on_change(counting_listener(&count));

    let creds = Credentials { email: "ALICE@example.com".to_owned(), password: "Secret1".to_owned() };
    let user = block_on(source.sign_in(&creds)).unwrap();
    assert_eq!(user, alice());
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(source.current_user(), Some(alice()));
}

#[test]
fn sign_in_with_wrong_password_is_rejected_silently() {
    let source = MemoryIdentitySource::new().with_account(alice(), "Secret1");
    let count = Arc::new(AtomicUsize::new(0));
    let _sub = source.on_change(counting_listener(&count));

    let creds = Credentials { email: "alice@example.com".to_owned(), password: "nope".to_owned() };
    assert_eq!(block_on(source.sign_in(&creds)), Err(AuthError::InvalidCredentials));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn register_creates_account_and_rejects_duplicates() {
    let source = MemoryIdentitySource::new();
    let registration = Registration {
        display_name: "Bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "Secret1".to_owned(),
        avatar_url: None,
    };
    let user = block_on(source.register(&registration)).unwrap();
    assert_eq!(user.display_name.as_deref(), Some("Bob"));
    assert_eq!(source.current_user(), Some(user));
    assert_eq!(block_on(source.register(&registration)), Err(AuthError::EmailInUse));
}

#[test]
fn sign_out_publishes_absence() {
    let source = MemoryIdentitySource::new();
    source.emit(Some(alice()));
    block_on(source.sign_out()).unwrap();
    assert_eq!(source.current_user(), None);
}

// =============================================================
// URL helpers
// =============================================================

#[test]
fn identity_endpoint_trims_trailing_slash() {
    assert_eq!(identity_endpoint("https://id.example.com/", SESSION_PATH), "https://id.example.com/session");
    assert_eq!(identity_endpoint("/identity", SIGN_IN_PATH), "/identity/sign-in");
}

#[test]
fn google_sign_in_url_encodes_return_target() {
    assert_eq!(
        google_sign_in_url("/identity", "https://app.example.com/login?from=/bookings"),
        "/identity/oauth/google?return_to=https%3A%2F%2Fapp.example.com%2Flogin%3Ffrom%3D%2Fbookings"
    );
}

#[test]
fn restore_backoff_doubles_then_caps() {
    assert_eq!(restore_backoff_ms(0), 500);
    assert_eq!(restore_backoff_ms(1), 1_000);
    assert_eq!(restore_backoff_ms(5), 16_000);
    assert_eq!(restore_backoff_ms(6), 30_000);
    assert_eq!(restore_backoff_ms(40), 30_000);
}
