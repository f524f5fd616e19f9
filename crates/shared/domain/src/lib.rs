//! # Domain Models
//!
//! Configuration models and shared constants with `serde` as the only dependency.
//! Keep it lean: no I/O and no locale logic, just data and defaults.

pub mod config;
pub mod constants;
