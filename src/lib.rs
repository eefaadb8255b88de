//! Mortgage repayment and UK stamp duty calculation engine
//!
//! Computes fixed-rate repayment quotes for residential purchases:
//! amortized monthly payments, total cost and interest over the term, and
//! SDLT (stamp duty) under the marginal band tables in force since
//! April 2025, including first-time buyer relief.
//!
//! The engine is a pure, synchronous calculation core. Presentation
//! (currency formatting, rounding for display) is left to callers.

pub mod quote;
pub mod scenario;
pub mod schedules;

pub use quote::{InvalidInput, Quote, QuoteEngine, QuoteRequest};
pub use schedules::{SdltAssumptions, SdltSchedule};
