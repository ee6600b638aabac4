//! Eligibility inquiry result codes and the tooling that carries them across service
//! boundaries: a decode layer, a catalog API, and response-log summaries.

pub mod codes;
pub mod config;
pub mod error;
pub mod response_log;
pub mod telemetry;

pub use codes::{EligibilityResultCode, UnknownResultCode};
