//! Shared utilities for the Tutor-Time admin API.
//!
//! - [`email`]: mail-sending collaborator and notification templates
//! - [`errors`]: application error type and `FAIL` envelope rendering
//! - [`filter`]: protected-field stripping for update payloads
//! - [`jwt`]: JWT token creation and verification
//! - [`otp`]: one-time password generation
//! - [`password`]: password hashing and verification

pub mod email;
pub mod errors;
pub mod filter;
pub mod jwt;
pub mod otp;
pub mod password;
