//! SDLT (stamp duty) band schedules

mod sdlt;
pub mod loader;

pub use sdlt::{SdltAssumptions, SdltBand, SdltSchedule};

// ============================================================================
// First-Time Buyer Relief
// ============================================================================
// Relief applies only while the purchase price stays at or below the ceiling.
// Above it the standard bands apply in full - there is no partial relief.

/// Maximum purchase price eligible for first-time buyer relief (April 2025)
pub const FTB_RELIEF_CEILING: f64 = 500_000.0;
