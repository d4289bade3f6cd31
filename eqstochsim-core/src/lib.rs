//! Closed-form relations for stochastic earthquake ground-motion simulation
//!
//! The crate is organised by the part of the ground-motion model each
//! relation belongs to:
//! - `source`: seismic moment, magnitude, corner frequency and stress drop
//! - `spectra`: single corner frequency source spectra and motion scaling
//! - `attenuation`: anelastic attenuation and geometric spreading
//!
//! Spectral and path terms are returned in log10 units. Combining them into
//! a full model is left to the caller.

pub mod attenuation;
pub mod errors;
pub mod parameters;
pub mod source;
pub mod spectra;
pub mod units;

/// Scalar type used for every physical quantity
pub type FloatValue = f64;
