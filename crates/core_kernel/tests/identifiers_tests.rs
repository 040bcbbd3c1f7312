//! Tests for strongly-typed identifiers

use core_kernel::{AccountId, ClaimId};
use uuid::Uuid;

#[test]
fn test_claim_id_round_trip() {
    let id = ClaimId::new_v7();
    let parsed: ClaimId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_parse_without_prefix() {
    let uuid = Uuid::new_v4();
    let parsed: AccountId = uuid.to_string().parse().unwrap();
    assert_eq!(parsed, AccountId::from(uuid));
}

#[test]
fn test_parse_rejects_garbage() {
    let result: Result<ClaimId, _> = "not-a-uuid".parse();
    assert!(result.is_err());
}

#[test]
fn test_serde_is_transparent() {
    let id = ClaimId::new_v7();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));

    let back: ClaimId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_v7_ids_are_time_ordered() {
    let first = ClaimId::new_v7();
    let second = ClaimId::new_v7();
    assert!(first.as_uuid() <= second.as_uuid());
}

#[test]
fn test_prefixes_differ_per_entity() {
    assert_ne!(ClaimId::prefix(), AccountId::prefix());
}
