//! finplan-core — deterministic personal-finance calculators.
//!
//! RULES:
//!   - Every calculator is a pure function: same inputs, same outputs.
//!   - No ambient global state. The FinancialProfile is built by the caller
//!     and passed by reference; calculators return fresh values.
//!   - No I/O inside calculators. File loading lives in profile and config.
//!   - Currency is f64 for the life of a computation. Nothing rounds
//!     mid-stream; presentation rounding is the caller's job.
//!   - One canonical module per concern. Tax math lives in tax, geography
//!     in geo — nothing is duplicated per call site.

pub mod budget;
pub mod config;
pub mod error;
pub mod geo;
pub mod investment;
pub mod payoff;
pub mod profile;
pub mod report;
pub mod tax;
pub mod types;
