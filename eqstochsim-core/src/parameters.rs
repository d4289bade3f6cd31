//! Parameter sets with literature defaults
//!
//! These structs group the arguments of the free functions so they can be
//! stored in, and loaded from, a TOML configuration file. Missing fields fall
//! back to their defaults.
//!
//! ```toml
//! [source]
//! units = "si"
//! wave_type = "s"
//! shape = { gam = 2.0, n = 2.0 }
//!
//! [path]
//! model = "frequency_dependent"
//! q = 180.0
//! a = 0.45
//! ```

use crate::attenuation::{f_dep_attenuation, f_idep_attenuation, single_geospreading};
use crate::errors::EqPhysicsResult;
use crate::source::{fc_in, mo_from_mw_in, moment_scaling, mw_in, sd};
use crate::spectra::SourceShape;
use crate::units::{UnitSystem, WaveType};
use crate::FloatValue;
use log::debug;
use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

/// Parameters of the displacement to moment scaling at the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentScalingParameters {
    /// Shear-wave velocity at the source
    /// unit: m/s
    /// default: 3500.0
    pub vs: FloatValue,

    /// Density at the source
    /// unit: kg/m^3
    /// default: 2600.0
    pub rho: FloatValue,

    /// Reference distance
    /// unit: m
    /// default: 1000.0
    pub ro: FloatValue,

    /// Free surface amplification
    /// unit: dimensionless
    /// default: 2.0 (SH waves)
    pub fs: FloatValue,

    /// Average radiation coefficient (Boore and Boatwright, 1984)
    /// unit: dimensionless
    /// default: 0.55
    pub rp: FloatValue,
}

impl Default for MomentScalingParameters {
    fn default() -> Self {
        Self {
            vs: 3500.0,
            rho: 2600.0,
            ro: 1000.0,
            fs: 2.0,
            rp: 0.55,
        }
    }
}

impl MomentScalingParameters {
    /// See [`moment_scaling`]
    pub fn log10_factor(&self) -> FloatValue {
        moment_scaling(self.vs, self.rho, self.ro, self.fs, self.rp)
    }
}

/// Source conventions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceParameters {
    pub units: UnitSystem,
    pub wave_type: WaveType,
    pub shape: SourceShape,
}

impl SourceParameters {
    /// Seismic moment of a magnitude `mw` in these units
    pub fn seismic_moment(&self, mw: FloatValue) -> FloatValue {
        mo_from_mw_in(mw, self.units)
    }

    pub fn magnitude(&self, mo: FloatValue) -> FloatValue {
        mw_in(mo, self.units)
    }

    pub fn corner_frequency(&self, vs: FloatValue, sd: FloatValue, mo: FloatValue) -> FloatValue {
        fc_in(vs, sd, mo, self.units)
    }

    /// Stress drop using the `k` of the configured wave type
    pub fn stress_drop(&self, fc: FloatValue, mo: FloatValue, vs: FloatValue) -> FloatValue {
        sd(fc, mo, vs, self.wave_type.k())
    }

    /// Source spectrum with the configured shape (log10 units)
    pub fn spectrum<S, D>(&self, f: &ArrayBase<S, D>, llpsp: FloatValue, fc: FloatValue) -> Array<FloatValue, D>
    where
        S: Data<Elem = FloatValue>,
        D: Dimension,
    {
        self.shape.evaluate(f, llpsp, fc)
    }
}

/// Anelastic attenuation relation applied along the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttenuationModel {
    /// [`f_idep_attenuation`], `a` is ignored
    #[default]
    FrequencyIndependent,
    /// [`f_dep_attenuation`]
    FrequencyDependent,
}

/// Propagation path between source and site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathParameters {
    /// Attenuation relation
    /// default: frequency_independent
    pub model: AttenuationModel,

    /// Quality factor
    /// default: 600.0
    pub q: FloatValue,

    /// Frequency dependence of attenuation, `0 <= a < 1`
    /// Only used by the frequency dependent model.
    /// default: 0.0
    pub a: FloatValue,

    /// Average seismic velocity along the path
    /// unit: same length unit as distances
    /// default: 3500.0
    pub velocity: FloatValue,

    /// Geometric spreading exponent
    /// default: 1.0 (body waves)
    pub spreading_exponent: FloatValue,
}

impl Default for PathParameters {
    fn default() -> Self {
        Self {
            model: AttenuationModel::FrequencyIndependent,
            q: 600.0,
            a: 0.0,
            velocity: 3500.0,
            spreading_exponent: 1.0,
        }
    }
}

impl PathParameters {
    /// Anelastic attenuation over distance `r` (log10 units)
    ///
    /// The two relations group the path velocity differently, so switching
    /// `model` changes the result even at `a == 0`.
    pub fn attenuation<S, D>(&self, f: &ArrayBase<S, D>, r: FloatValue) -> EqPhysicsResult<Array<FloatValue, D>>
    where
        S: Data<Elem = FloatValue>,
        D: Dimension,
    {
        match self.model {
            AttenuationModel::FrequencyIndependent => Ok(f_idep_attenuation(f, self.q, r, self.velocity)),
            AttenuationModel::FrequencyDependent => f_dep_attenuation(f, self.a, self.q, r, self.velocity),
        }
    }

    pub fn geospreading<S, D>(&self, r: &ArrayBase<S, D>) -> Array<FloatValue, D>
    where
        S: Data<Elem = FloatValue>,
        D: Dimension,
    {
        single_geospreading(r, self.spreading_exponent)
    }
}

/// Full set of formula parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    pub source: SourceParameters,
    pub moment_scaling: MomentScalingParameters,
    pub path: PathParameters,
}

impl FormulaConfig {
    pub fn from_toml_str(s: &str) -> EqPhysicsResult<Self> {
        let config: FormulaConfig = toml::from_str(s)?;
        debug!("Loaded formula configuration: {:?}", config);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> EqPhysicsResult<String> {
        Ok(toml::to_string(self)?)
    }
}
