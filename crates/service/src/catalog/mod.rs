//! Read-only reference data: repair services and training courses.

pub mod repository;
pub mod service;
