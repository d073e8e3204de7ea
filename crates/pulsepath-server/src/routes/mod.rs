pub mod chat;
pub mod clinics;
pub mod health;

pub use chat::{doctor, sentiment, DoctorReply, TextRequest};
pub use clinics::{clinics, ClinicsParams};
pub use health::{health, HealthResponse};
