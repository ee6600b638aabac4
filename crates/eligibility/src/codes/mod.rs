//! Eligibility result codes: the closed outcome enumeration, its catalog, and HTTP lookups.

mod catalog;
mod result_code;
pub mod router;

pub use catalog::{catalog, lookup, ResultCodeView};
pub use result_code::{EligibilityResultCode, UnknownResultCode};
pub use router::result_code_router;
