//! Feature modules. Each follows the same structure: `model.rs` for data
//! types and DTOs, `service.rs` for business logic, `controller.rs` for HTTP
//! handlers, and `router.rs` for route wiring. Model-only modules
//! (appointments, messages) exist for records this API manages only through
//! cascade deletion.

pub mod appointments;
pub mod messages;
pub mod students;
pub mod teachers;
pub mod users;

pub use self::users::model::User;
