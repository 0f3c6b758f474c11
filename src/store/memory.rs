//! In-memory store used by tests in place of PostgreSQL.
//!
//! Mirrors the semantics of [`super::postgres::PgStore`]: unique emails,
//! role-scoped approval, atomic cascade deletion (trivially, under one lock).

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::appointments::model::{Appointment, NewAppointment};
use crate::modules::messages::model::{Message, NewMessage};
use crate::modules::users::model::{NewUser, User, UserRole, UserUpdate};
use crate::store::{AdminStore, CascadeSummary};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    appointments: Mutex<Vec<Appointment>>,
    messages: Mutex<Vec<Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_users_by_role(&self, role: UserRole) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        let mut matching: Vec<User> = users.iter().filter(|u| u.role == role).cloned().collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let hashed_password = hash_password(&new_user.password)?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::bad_request("Email already in use"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            name: new_user.name,
            role: new_user.role,
            department: new_user.department,
            subject: new_user.subject,
            age: new_user.age,
            password: hashed_password,
            admission_status: false,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(department) = update.department {
            user.department = Some(department);
        }
        if let Some(subject) = update.subject {
            user.subject = Some(subject);
        }
        if let Some(age) = update.age {
            user.age = Some(age);
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn approve_student(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users
            .iter_mut()
            .find(|u| u.id == id && u.role == UserRole::Student)
        else {
            return Ok(None);
        };

        user.admission_status = true;
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn delete_user_cascade(&self, id: Uuid) -> Result<Option<CascadeSummary>, AppError> {
        let mut users = self.users.lock().unwrap();
        let Some(position) = users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        let user = users.remove(position);

        let mut appointments = self.appointments.lock().unwrap();
        let appointments_before = appointments.len();
        appointments.retain(|a| a.send_by != user.email);
        let appointments_deleted = (appointments_before - appointments.len()) as u64;

        let mut messages = self.messages.lock().unwrap();
        let messages_before = messages.len();
        messages.retain(|m| m.from_email != user.email && m.to_email != user.email);
        let messages_deleted = (messages_before - messages.len()) as u64;

        Ok(Some(CascadeSummary {
            appointments_deleted,
            messages_deleted,
        }))
    }

    async fn appointments_by_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<Appointment>, AppError> {
        let appointments = self.appointments.lock().unwrap();
        let mut matching: Vec<Appointment> = appointments
            .iter()
            .filter(|a| emails.contains(&a.send_by))
            .cloned()
            .collect();
        matching.sort_by_key(|a| a.starts_at);
        Ok(matching)
    }

    async fn create_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<Appointment, AppError> {
        let record = Appointment {
            id: Uuid::new_v4(),
            send_by: appointment.send_by,
            subject: appointment.subject,
            starts_at: appointment.starts_at,
            created_at: Utc::now(),
        };
        self.appointments.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn create_message(&self, message: NewMessage) -> Result<Message, AppError> {
        let record = Message {
            id: Uuid::new_v4(),
            from_email: message.from_email,
            to_email: message.to_email,
            body: message.body,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn messages_by_email(&self, email: &str) -> Result<Vec<Message>, AppError> {
        let messages = self.messages.lock().unwrap();
        Ok(messages
            .iter()
            .filter(|m| m.from_email == email || m.to_email == email)
            .cloned()
            .collect())
    }
}
