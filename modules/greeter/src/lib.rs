#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Greeter Library
//!
//! Core logic of the pipeline demo application:
//! - Welcome message formatting (with a guest fallback for blank names)
//! - Integer sum and parity checks
//! - Wall-clock timestamps in milliseconds since the Unix epoch
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Stateless service exposing all operations
//! - `domain/clock.rs` - Clock abstraction used for timestamps
//! - `demo.rs` - One-shot demo run that drives every operation
//!
//! The operations are also exported as free functions for callers that
//! do not need a `Service` instance.

pub mod demo;
pub mod domain;

pub use demo::{DemoInput, DemoReport, run_demo};
pub use domain::arithmetic::{is_even, sum};
pub use domain::clock::{Clock, MonotonicClock, SystemClock, current_timestamp_millis};
pub use domain::service::Service;
pub use domain::welcome::{GUEST_GREETING, format_welcome};
