// src/application/queries/mod.rs
pub mod registrations;
