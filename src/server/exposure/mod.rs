//! API exposure modules
//!
//! Each exposure consumes the shared `AppState` and produces a Router for
//! its protocol. Only REST is provided.

pub mod rest;

pub use rest::RestExposure;
