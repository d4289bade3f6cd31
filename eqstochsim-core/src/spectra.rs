//! Source spectral shape and motion-domain scaling
//!
//! Both terms are in log10 units and are added to the other terms of a
//! ground-motion model by the caller.
//!
//! Array versions accept any `ndarray` array of frequencies and return an array
//! of the same shape. They are the element-wise map of the scalar `*_at`
//! versions.

use crate::errors::{EqPhysicsError, EqPhysicsResult};
use crate::FloatValue;
use log::warn;
use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// High-frequency falloff of a single corner frequency source model
///
/// The pair $(\gamma, n)$ controls the shape of the spectrum above the corner
/// frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceShape {
    pub gam: FloatValue,
    pub n: FloatValue,
}

impl SourceShape {
    /// Omega-squared model (Brune, 1970)
    pub const BRUNE: SourceShape = SourceShape { gam: 1.0, n: 2.0 };
    /// Omega-cubed model (Boatwright, 1980)
    pub const BOATWRIGHT: SourceShape = SourceShape { gam: 2.0, n: 2.0 };

    pub fn evaluate<S, D>(
        &self,
        f: &ArrayBase<S, D>,
        llpsp: FloatValue,
        fc: FloatValue,
    ) -> Array<FloatValue, D>
    where
        S: Data<Elem = FloatValue>,
        D: Dimension,
    {
        source_scf(f, llpsp, fc, self.gam, self.n)
    }
}

impl Default for SourceShape {
    fn default() -> Self {
        Self::BRUNE
    }
}

/// Generic single corner frequency source model at one frequency
///
/// $$\log_{10} A(f) = L - \frac{1}{\gamma}\log_{10}\left(1 + \left(\frac{f}{f_c}\right)^{\gamma n}\right)$$
///
/// where $L$ (`llpsp`) is the log10 amplitude of the long period plateau.
pub fn source_scf_at(
    f: FloatValue,
    llpsp: FloatValue,
    fc: FloatValue,
    gam: FloatValue,
    n: FloatValue,
) -> FloatValue {
    llpsp - (1.0 / gam) * (1.0 + (f / fc).powf(gam * n)).log10()
}

/// Far-field displacement spectrum of a single corner frequency source (log10 units)
///
/// See [`source_scf_at`]. At `f == 0` every element equals `llpsp`.
pub fn source_scf<S, D>(
    f: &ArrayBase<S, D>,
    llpsp: FloatValue,
    fc: FloatValue,
    gam: FloatValue,
    n: FloatValue,
) -> Array<FloatValue, D>
where
    S: Data<Elem = FloatValue>,
    D: Dimension,
{
    f.mapv(|f| source_scf_at(f, llpsp, fc, gam, n))
}

/// Ground-motion quantity a displacement spectrum is converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    #[serde(rename = "disp")]
    Displacement,
    #[serde(rename = "vel")]
    Velocity,
    #[serde(rename = "acc")]
    Acceleration,
}

impl Motion {
    pub const OPTIONS: [&'static str; 3] = ["disp", "vel", "acc"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::Displacement => "disp",
            Motion::Velocity => "vel",
            Motion::Acceleration => "acc",
        }
    }

    /// Number of time derivatives taken from displacement
    pub fn derivative_order(&self) -> i32 {
        match self {
            Motion::Displacement => 0,
            Motion::Velocity => 1,
            Motion::Acceleration => 2,
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Motion {
    type Err = EqPhysicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disp" => Ok(Motion::Displacement),
            "vel" => Ok(Motion::Velocity),
            "acc" => Ok(Motion::Acceleration),
            _ => {
                warn!("Unknown motion '{}', expected one of {:?}", s, Motion::OPTIONS);
                Err(EqPhysicsError::InvalidMotion(s.to_string()))
            }
        }
    }
}

/// Displacement to `motion` scaling at one frequency (log10 units)
///
/// $$\log_{10}\left((2 \pi f)^k\right)$$
///
/// with $k$ = 0, 1 or 2 for displacement, velocity and acceleration.
/// Add to differentiate a log10 displacement spectrum, subtract to integrate.
pub fn motion_factor_at(f: FloatValue, motion: Motion) -> FloatValue {
    // (2 pi f)^0 == 1 for every f, so displacement is exactly zero
    (2.0 * PI * f).powi(motion.derivative_order()).log10()
}

/// Displacement to `motion` scaling for an array of frequencies
///
/// Displacement gives an array of zeros with the shape of `f`.
pub fn motion_factor_for<S, D>(f: &ArrayBase<S, D>, motion: Motion) -> Array<FloatValue, D>
where
    S: Data<Elem = FloatValue>,
    D: Dimension,
{
    f.mapv(|f| motion_factor_at(f, motion))
}

/// Displacement to motion scaling selected by name
///
/// `motion` is matched case-insensitively against `disp`, `vel` and `acc`.
pub fn motion_factor<S, D>(f: &ArrayBase<S, D>, motion: &str) -> EqPhysicsResult<Array<FloatValue, D>>
where
    S: Data<Elem = FloatValue>,
    D: Dimension,
{
    let motion: Motion = motion.parse()?;
    Ok(motion_factor_for(f, motion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    fn frequencies() -> Array1<FloatValue> {
        Array1::logspace(10.0, -2.0, 2.0, 50)
    }

    #[test]
    fn test_plateau_at_zero_frequency() {
        for llpsp in [-3.0, 0.0, 12.5, 18.1] {
            let spectrum = source_scf(&array![0.0], llpsp, 1.0, 1.0, 2.0);
            assert_eq!(spectrum[0], llpsp);
        }
    }

    #[test]
    fn test_brune_at_corner_frequency() {
        // (f / fc)^2 = 1 so the spectrum is down by log10(2)
        let value = source_scf_at(2.5, 10.0, 2.5, 1.0, 2.0);
        assert_relative_eq!(value, 10.0 - 2.0_f64.log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_high_frequency_falloff_slope() {
        let f = array![1000.0, 10_000.0];
        let brune = SourceShape::BRUNE.evaluate(&f, 0.0, 1.0);
        let boatwright = SourceShape::BOATWRIGHT.evaluate(&f, 0.0, 1.0);
        // Both fall off as f^-n far above the corner
        assert_relative_eq!(brune[0] - brune[1], 2.0, epsilon = 1e-5);
        assert_relative_eq!(boatwright[0] - boatwright[1], 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_boatwright_sharper_at_corner() {
        let brune = source_scf_at(1.0, 0.0, 1.0, 1.0, 2.0);
        let boatwright = source_scf_at(1.0, 0.0, 1.0, 2.0, 2.0);
        assert!(boatwright > brune);
    }

    #[test]
    fn test_source_scf_monotonic() {
        let f = frequencies();
        for shape in [SourceShape::BRUNE, SourceShape::BOATWRIGHT, SourceShape { gam: 0.5, n: 1.5 }] {
            let spectrum = shape.evaluate(&f, 5.0, 0.7);
            for i in 1..spectrum.len() {
                assert!(
                    spectrum[i] <= spectrum[i - 1],
                    "Spectrum increased: {} -> {}",
                    spectrum[i - 1],
                    spectrum[i]
                );
            }
        }
    }

    #[test]
    fn test_source_scf_matches_scalar() {
        let f = frequencies();
        let spectrum = source_scf(&f, 17.0, 0.3, 1.0, 2.0);
        for (fi, value) in f.iter().zip(spectrum.iter()) {
            assert_eq!(*value, source_scf_at(*fi, 17.0, 0.3, 1.0, 2.0));
        }
    }

    #[test]
    fn test_source_scf_keeps_shape() {
        let f = array![[0.1, 1.0, 10.0], [0.2, 2.0, 20.0]];
        let spectrum = source_scf(&f, 1.0, 1.0, 1.0, 2.0);
        assert_eq!(spectrum.shape(), &[2, 3]);
        assert_eq!(spectrum[[1, 1]], source_scf_at(2.0, 1.0, 1.0, 1.0, 2.0));
    }

    #[test]
    fn test_motion_parse_case_insensitive() {
        assert_eq!("disp".parse::<Motion>().unwrap(), Motion::Displacement);
        assert_eq!("VEL".parse::<Motion>().unwrap(), Motion::Velocity);
        assert_eq!("Acc".parse::<Motion>().unwrap(), Motion::Acceleration);
    }

    #[test]
    fn test_motion_factor_displacement_is_zero() {
        let factor = motion_factor(&frequencies(), "disp").unwrap();
        assert!(factor.iter().all(|v| *v == 0.0));
        assert_eq!(factor.len(), 50);
    }

    #[test]
    fn test_motion_factor_velocity() {
        let f = array![0.5, 1.0, 4.0];
        let factor = motion_factor(&f, "vel").unwrap();
        for (fi, value) in f.iter().zip(factor.iter()) {
            assert_relative_eq!(*value, (2.0 * PI * fi).log10(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_motion_factor_acceleration_is_twice_velocity() {
        let f = frequencies();
        let vel = motion_factor_for(&f, Motion::Velocity);
        let acc = motion_factor_for(&f, Motion::Acceleration);
        for (v, a) in vel.iter().zip(acc.iter()) {
            assert_relative_eq!(*a, 2.0 * v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_motion_factor_invalid() {
        let err = motion_factor(&array![1.0], "BAD").unwrap_err();
        assert!(matches!(err, EqPhysicsError::InvalidMotion(ref s) if s == "BAD"));
        let message = err.to_string();
        for option in Motion::OPTIONS {
            assert!(message.contains(option), "{} missing from '{}'", option, message);
        }
    }

    #[test]
    fn test_derivative_order() {
        assert_eq!(Motion::Displacement.derivative_order(), 0);
        assert_eq!(Motion::Velocity.derivative_order(), 1);
        assert_eq!(Motion::Acceleration.derivative_order(), 2);
        for f in [0.0, 0.01, 1.0, 50.0] {
            assert_eq!(motion_factor_at(f, Motion::Displacement), 0.0);
        }
        assert_relative_eq!(motion_factor_at(0.5, Motion::Acceleration), (PI * PI).log10(), epsilon = 1e-12);
    }

    #[test]
    fn test_motion_display_round_trip() {
        for motion in [Motion::Displacement, Motion::Velocity, Motion::Acceleration] {
            assert_eq!(motion.to_string().parse::<Motion>().unwrap(), motion);
        }
    }
}
