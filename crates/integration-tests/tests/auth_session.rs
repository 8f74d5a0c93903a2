//! Integration tests for authentication and the session slot.

#![allow(clippy::unwrap_used)]

use designi_core::{Email, Phone};
use designi_integration_tests::{customer, memory_state};
use designi_storefront::error::{AppError, INVALID_CREDENTIALS_MESSAGE};
use designi_storefront::services::AuthError;
use designi_storefront::state::AppState;
use designi_storefront::store::{FileStore, KeyValueStore, MemoryStore, StoreError, keys};

const EMAIL: &str = "bia@designi.com";
const PHONE: &str = "(21) 99876-5432";

// =============================================================================
// Register / Authenticate
// =============================================================================

#[test]
fn test_register_then_authenticate() {
    let state = memory_state();
    let user = state
        .auth()
        .register("Bia", Email::parse(EMAIL).unwrap(), Phone::parse(PHONE).unwrap())
        .unwrap();
    assert_eq!(state.auth().authenticate(EMAIL, PHONE), Some(user));
}

#[test]
fn test_mismatched_credentials_are_absent() {
    let state = memory_state();
    state.auth().sign_up("Bia", EMAIL, PHONE).unwrap();

    assert_eq!(state.auth().authenticate(EMAIL, "(21) 99876-5431"), None);
    assert_eq!(state.auth().authenticate("bia@designi.com.br", PHONE), None);
    assert_eq!(state.auth().authenticate("BIA@designi.com", PHONE), None);
}

#[test]
fn test_registration_keeps_seed_admin() {
    let state = memory_state();
    state.auth().sign_up("Bia", EMAIL, PHONE).unwrap();
    assert!(state.auth().authenticate("admin@designi.com", "(00) 00000-0000").is_some());
}

#[test]
fn test_duplicate_sign_up_rejected() {
    let state = memory_state();
    state.auth().sign_up("Bia", EMAIL, PHONE).unwrap();
    let err = state.auth().sign_up("Outra Bia", EMAIL, PHONE).unwrap_err();
    assert!(matches!(err, AuthError::UserAlreadyExists));
}

#[test]
fn test_wrong_credentials_message() {
    let state = memory_state();
    let err = state.auth().sign_in(EMAIL, PHONE).unwrap_err();
    assert_eq!(AppError::from(err).user_message(), INVALID_CREDENTIALS_MESSAGE);
}

#[test]
fn test_corrupted_users_fall_back_to_seed() {
    let state = memory_state();
    state.store().backend().set(keys::USERS, "not json").unwrap();
    let admin = state.auth().sign_in("admin@designi.com", "(00) 00000-0000").unwrap();
    assert!(admin.is_admin());
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_set_then_clear_session() {
    let state = memory_state();
    let user = customer();
    state.session().set_current_user(Some(&user)).unwrap();
    assert_eq!(state.session().current_user(), Some(user));

    state.session().set_current_user(None).unwrap();
    assert_eq!(state.session().current_user(), None);
    assert!(!state.store().backend().contains_key(keys::CURRENT_USER));
}

#[test]
fn test_sign_up_logs_in_and_sign_out_logs_out() {
    let state = memory_state();
    let user = state.auth().sign_up("Bia", EMAIL, PHONE).unwrap();
    assert_eq!(state.session().current_user(), Some(user));

    state.auth().sign_out().unwrap();
    assert_eq!(state.session().current_user(), None);
}

#[test]
fn test_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let first = AppState::new(FileStore::open(dir.path(), None).unwrap());
    first.auth().sign_up("Bia", EMAIL, PHONE).unwrap();

    let second = AppState::new(FileStore::open(dir.path(), None).unwrap());
    let current = second.session().current_user().unwrap();
    assert_eq!(current.email.as_str(), EMAIL);
    assert!(dir.path().join("current_user.json").is_file());

    second.auth().sign_out().unwrap();
    assert!(!dir.path().join("current_user.json").exists());
}

#[test]
fn test_full_store_reports_write_failure() {
    let state = AppState::new(MemoryStore::with_quota(32));
    let err = state.auth().sign_up("Bia", EMAIL, PHONE).unwrap_err();
    assert!(matches!(err, AuthError::Store(StoreError::QuotaExceeded { .. })));
    assert_eq!(
        AppError::from(err).user_message(),
        "Não foi possível salvar. Tente novamente."
    );
    assert_eq!(state.session().current_user(), None);
}
