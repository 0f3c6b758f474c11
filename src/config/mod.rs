//! Configuration for the Tutor-Time admin API.
//!
//! Each submodule owns one concern and loads it from environment variables
//! with sensible local-development defaults:
//!
//! - [`cors`]: allowed frontend origins
//! - [`database`]: PostgreSQL connection pool
//! - [`email`]: SMTP transport settings
//! - [`jwt`]: token secret and expiry

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
