//! Record schemas and their storage mapping.
//!
//! Each collection module holds the SeaORM entity for its table, the API
//! record served over HTTP, and the restricted input used on creation.

pub mod errors;
pub mod db;
pub mod service;
pub mod achievement;
pub mod enrollment;
pub mod course;

/// Upper bound on rows returned by any list query.
pub const FETCH_LIMIT: u64 = 100;
