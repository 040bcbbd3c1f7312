//! Core Kernel - Foundational types for the warranty core system
//!
//! This crate provides the building blocks shared by the domain modules:
//! strongly-typed identifiers used across claims and accounts.

pub mod identifiers;

pub use identifiers::{AccountId, ClaimId};
