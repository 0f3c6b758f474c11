use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::appointments::model::Appointment;
use crate::modules::students::model::ApprovalStatus;
use crate::modules::teachers::model::{
    CreateTeacherDto, TeacherWithAppointments, UpdateTeacherDto,
};
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::students::controller::approve_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            User,
            UserRole,
            Appointment,
            CreateTeacherDto,
            UpdateTeacherDto,
            TeacherWithAppointments,
            ApprovalStatus,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Teachers", description = "Teacher account administration"),
        (name = "Students", description = "Student approval and removal")
    ),
    info(
        title = "Tutor-Time Admin API",
        version = "0.1.0",
        description = "Administrative REST API for the Tutor-Time tutoring platform: teacher and student account management with role-guarded access.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
