//! Plan scoring and optimization engine for clinical care-plan simulations.
//!
//! A student assembles a care plan from individual interventions, referrals,
//! and population-level strategies. The engine scores that plan against the
//! case baseline and against a greedy best-achievable ceiling, rates the
//! population strategies, tracks resource spend, and checks critical-need
//! coverage. Every computation is a pure function of an immutable snapshot.

pub mod config;
pub mod error;
pub mod plan;
pub mod telemetry;
