//! Pieces shared by the server and the smoke client: wire types and
//! tracing setup.

pub mod types;
pub mod utils;
