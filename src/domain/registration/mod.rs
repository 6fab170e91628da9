// src/domain/registration/mod.rs
pub mod entity;
pub mod repository;
pub mod validators;
pub mod value_objects;

pub use entity::{NewRegistration, Registration};
pub use repository::RegistrationRepository;
pub use value_objects::RegistrationId;
