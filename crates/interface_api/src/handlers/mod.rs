//! Request handlers

pub mod accounts;
pub mod claims;
pub mod health;
