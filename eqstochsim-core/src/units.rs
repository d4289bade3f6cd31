//! Unit conventions and literature constants
//!
//! The source relations carry a scaling constant that depends on whether the
//! inputs are expressed in SI (N m, Pa, m/s) or cgs (dyne-cm, bar, km/s) units.
//!
//! # References
//!
//! - Hanks, T. C., & Kanamori, H. (1979). A moment magnitude scale.
//! - Brune, J. N. (1970). Tectonic stress and the spectra of seismic shear waves
//!   from earthquakes.
//! - Madariaga, R. (1976). Dynamics of an expanding circular fault.
//! - Boore, D. M. (2003). Simulation of ground motion using the stochastic method.

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Magnitude constant for seismic moment in N m
pub const MAGNITUDE_CONSTANT_SI: FloatValue = 6.0333;
/// Magnitude constant for seismic moment in dyne-cm
pub const MAGNITUDE_CONSTANT_CGS: FloatValue = 10.7;

/// Corner frequency constant for SI inputs
pub const CORNER_FREQUENCY_CONSTANT_SI: FloatValue = 0.49;
/// Corner frequency constant for cgs inputs (Boore, 2003)
pub const CORNER_FREQUENCY_CONSTANT_CGS: FloatValue = 4.9e6;

/// Stress drop geometry constant for S waves (Brune, 1970)
pub const S_WAVE_K: FloatValue = 0.37;
/// Stress drop geometry constant for P waves (Madariaga, 1976)
pub const P_WAVE_K: FloatValue = 0.32;

/// Unit system the source parameters are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Si,
    Cgs,
}

impl UnitSystem {
    /// Constant `c` in $M_w = \frac{2}{3}\log_{10}(M_0) - c$
    pub fn magnitude_constant(&self) -> FloatValue {
        match self {
            UnitSystem::Si => MAGNITUDE_CONSTANT_SI,
            UnitSystem::Cgs => MAGNITUDE_CONSTANT_CGS,
        }
    }

    /// Constant `c` in $f_c = c \beta (\Delta\sigma / M_0)^{1/3}$
    pub fn corner_frequency_constant(&self) -> FloatValue {
        match self {
            UnitSystem::Si => CORNER_FREQUENCY_CONSTANT_SI,
            UnitSystem::Cgs => CORNER_FREQUENCY_CONSTANT_CGS,
        }
    }
}

/// Body-wave type used to pick the stress drop constant `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveType {
    P,
    #[default]
    S,
}

impl WaveType {
    pub fn k(&self) -> FloatValue {
        match self {
            WaveType::P => P_WAVE_K,
            WaveType::S => S_WAVE_K,
        }
    }
}
