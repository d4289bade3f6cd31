//! Closed-form relations for stochastic earthquake ground-motion simulation
//!
//! The formulas live in `eqstochsim-core` and are re-exported here. With the
//! `python` feature enabled this crate also builds the `eqstochsim._lib`
//! extension module.

pub use eqstochsim_core::{attenuation, errors, parameters, source, spectra, units, FloatValue};

#[cfg(feature = "python")]
pub mod python;
