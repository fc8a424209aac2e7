//! Service layer: persistence gateway and the creation rules for records.
//! - Repositories wrap the table helpers in `models` behind traits.
//! - Services generate ids and timestamps through injected factories.

pub mod errors;
pub mod factory;
pub mod catalog;
pub mod achievement;
pub mod enrollment;
#[cfg(test)]
pub mod test_support;
