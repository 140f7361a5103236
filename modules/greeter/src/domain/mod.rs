//! Domain layer for the greeter
//!
//! Contains the welcome formatting, arithmetic and clock logic.

pub mod arithmetic;
pub mod clock;
pub mod service;
pub mod welcome;

pub use service::Service;
