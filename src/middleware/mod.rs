//! Request-processing middleware.
//!
//! - [`auth`]: JWT validation and the `AuthUser` extractor
//! - [`role`]: role membership guard for admin route trees
//!
//! Flow: the client sends `Authorization: Bearer <token>`; `AuthUser`
//! verifies the token and exposes its claims; the role guard checks the
//! claims' role against the route tree's allowed set before the handler runs.

pub mod auth;
pub mod role;
