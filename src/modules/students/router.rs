use axum::{
    Router,
    routing::{delete, post},
};

use crate::modules::students::controller::{approve_student, delete_student};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/approve", post(approve_student))
        .route("/{id}", delete(delete_student))
}
