//! Tests for the accounts domain types

use chrono::Utc;
use core_kernel::AccountId;

use domain_accounts::account::{Account, AccountProfile};
use domain_accounts::credentials;

fn stored_account(hash: &str) -> Account {
    Account {
        id: AccountId::new_v7(),
        email: "admin@example.com".to_string(),
        password_hash: hash.to_string(),
        is_admin: true,
        created_at: Utc::now(),
    }
}

#[test]
fn test_stored_hash_verifies_the_original_secret_only() {
    let hash = credentials::hash_secret("correct-secret").unwrap();
    let account = stored_account(&hash);

    assert!(credentials::verify_secret("correct-secret", &account.password_hash));
    assert!(!credentials::verify_secret("other-secret", &account.password_hash));
}

#[test]
fn test_hash_is_a_phc_string() {
    let hash = credentials::hash_secret("secret").unwrap();
    assert!(hash.starts_with("$argon2id$"));
}

#[test]
fn test_profile_keeps_public_fields() {
    let hash = credentials::hash_secret("secret").unwrap();
    let account = stored_account(&hash);
    let id = account.id;

    let profile = AccountProfile::from(account);

    assert_eq!(profile.id, id);
    assert_eq!(profile.email, "admin@example.com");
    assert!(profile.is_admin);
}
