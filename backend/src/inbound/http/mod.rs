//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod reservations;
pub mod schemas;
pub mod state;
pub mod tables;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
