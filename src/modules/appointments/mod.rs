pub mod model;

pub use model::{Appointment, NewAppointment};
