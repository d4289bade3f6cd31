//! Path attenuation and geometric spreading
//!
//! All terms are in log10 units. Distance `r` and path velocity `b` only need
//! to share a length unit (m or km).

use crate::errors::{EqPhysicsError, EqPhysicsResult};
use crate::FloatValue;
use log::warn;
use ndarray::{Array, ArrayBase, Data, Dimension};
use std::f64::consts::{LN_10, PI};

/// Frequency independent anelastic attenuation at one frequency
///
/// $$-\frac{\pi f R}{Q \beta \ln 10}$$
#[doc(alias = "f_idep_attenutation")]
pub fn f_idep_attenuation_at(f: FloatValue, q: FloatValue, r: FloatValue, b: FloatValue) -> FloatValue {
    -((PI * f * r) / (q * b)) / LN_10
}

/// Frequency independent anelastic attenuation (log10 units)
///
/// # Arguments
///
/// * `f` - Frequencies (Hz)
/// * `q` - Frequency independent quality factor
/// * `r` - Propagation distance
/// * `b` - Average seismic velocity along the path
#[doc(alias = "f_idep_attenutation")]
pub fn f_idep_attenuation<S, D>(
    f: &ArrayBase<S, D>,
    q: FloatValue,
    r: FloatValue,
    b: FloatValue,
) -> Array<FloatValue, D>
where
    S: Data<Elem = FloatValue>,
    D: Dimension,
{
    f.mapv(|f| f_idep_attenuation_at(f, q, r, b))
}

fn check_frequency_exponent(a: FloatValue) -> EqPhysicsResult<()> {
    if (0.0..1.0).contains(&a) {
        Ok(())
    } else {
        warn!("Rejecting frequency dependent attenuation with a={}", a);
        Err(EqPhysicsError::OutOfRange {
            parameter: "a",
            value: a,
            constraint: "0 <= a < 1",
        })
    }
}

fn f_dep_term(f: FloatValue, a: FloatValue, q: FloatValue, r: FloatValue, b: FloatValue) -> FloatValue {
    // Grouped as (R / Q) * b, unlike the frequency independent form
    -(PI * f.powf(1.0 - a) * (r / q * b) / LN_10)
}

/// Frequency dependent anelastic attenuation at one frequency
///
/// $$-\frac{\pi f^{1-a} (R / Q) \beta}{\ln 10}$$
///
/// Fails if `a` is outside `0 <= a < 1`.
pub fn f_dep_attenuation_at(
    f: FloatValue,
    a: FloatValue,
    q: FloatValue,
    r: FloatValue,
    b: FloatValue,
) -> EqPhysicsResult<FloatValue> {
    check_frequency_exponent(a)?;
    Ok(f_dep_term(f, a, q, r, b))
}

/// Frequency dependent anelastic attenuation (log10 units)
///
/// # Arguments
///
/// * `f` - Frequencies (Hz)
/// * `a` - Frequency dependence of attenuation, `0 <= a < 1`
/// * `q` - Quality factor
/// * `r` - Propagation distance
/// * `b` - Average seismic velocity along the path
///
/// `a` is checked before anything is computed.
pub fn f_dep_attenuation<S, D>(
    f: &ArrayBase<S, D>,
    a: FloatValue,
    q: FloatValue,
    r: FloatValue,
    b: FloatValue,
) -> EqPhysicsResult<Array<FloatValue, D>>
where
    S: Data<Elem = FloatValue>,
    D: Dimension,
{
    check_frequency_exponent(a)?;
    Ok(f.mapv(|f| f_dep_term(f, a, q, r, b)))
}

/// Geometric spreading with a single power-law exponent at one distance
///
/// $$-p \log_{10} R$$
pub fn single_geospreading_at(r: FloatValue, p: FloatValue) -> FloatValue {
    -p * r.log10()
}

/// Geometric spreading for an array of distances
pub fn single_geospreading<S, D>(r: &ArrayBase<S, D>, p: FloatValue) -> Array<FloatValue, D>
where
    S: Data<Elem = FloatValue>,
    D: Dimension,
{
    r.mapv(|r| single_geospreading_at(r, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    #[test]
    fn test_f_idep_reference_value() {
        let value = f_idep_attenuation_at(10.0, 600.0, 100_000.0, 3500.0);
        assert_relative_eq!(value, -0.649_703_025_638_972, max_relative = 1e-12);
    }

    #[test]
    fn test_f_idep_zero_frequency() {
        assert_eq!(f_idep_attenuation_at(0.0, 600.0, 1e5, 3500.0), 0.0);
    }

    #[test]
    fn test_f_idep_linear_in_frequency() {
        let f = array![1.0, 2.0, 4.0];
        let atten = f_idep_attenuation(&f, 300.0, 50.0, 3.5);
        assert_relative_eq!(atten[1], 2.0 * atten[0], max_relative = 1e-12);
        assert_relative_eq!(atten[2], 4.0 * atten[0], max_relative = 1e-12);
    }

    #[test]
    fn test_f_dep_rejects_a_out_of_range() {
        let f = array![1.0, 2.0];
        for a in [1.0, -0.1, 1.5, FloatValue::NAN] {
            let err = f_dep_attenuation(&f, a, 300.0, 50.0, 3.5).unwrap_err();
            assert!(matches!(err, EqPhysicsError::OutOfRange { parameter: "a", .. }));
            assert!(f_dep_attenuation_at(1.0, a, 300.0, 50.0, 3.5).is_err());
        }
    }

    #[test]
    fn test_f_dep_accepts_range_bounds() {
        let f = array![1.0, 2.0];
        assert!(f_dep_attenuation(&f, 0.0, 300.0, 50.0, 3.5).is_ok());
        assert!(f_dep_attenuation(&f, 0.999, 300.0, 50.0, 3.5).is_ok());
    }

    #[test]
    fn test_f_dep_at_a_zero_matches_f_idep_up_to_velocity_squared() {
        let f = Array1::linspace(0.1, 25.0, 20);
        let (q, r, b) = (600.0, 100.0, 3.5);
        let dep = f_dep_attenuation(&f, 0.0, q, r, b).unwrap();
        let idep = f_idep_attenuation(&f, q, r, b);
        // (R / Q) * b against R / (Q * b)
        for (d, i) in dep.iter().zip(idep.iter()) {
            assert_relative_eq!(*d, i * b * b, max_relative = 1e-12);
        }

        let dep = f_dep_attenuation(&f, 0.0, q, r, 1.0).unwrap();
        let idep = f_idep_attenuation(&f, q, r, 1.0);
        for (d, i) in dep.iter().zip(idep.iter()) {
            assert_relative_eq!(*d, *i, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_f_dep_matches_scalar() {
        let f = Array1::linspace(0.5, 20.0, 8);
        let atten = f_dep_attenuation(&f, 0.3, 200.0, 80.0, 3.6).unwrap();
        for (fi, value) in f.iter().zip(atten.iter()) {
            assert_eq!(*value, f_dep_attenuation_at(*fi, 0.3, 200.0, 80.0, 3.6).unwrap());
        }
    }

    #[test]
    fn test_single_geospreading() {
        assert_eq!(single_geospreading_at(1.0, 1.0), 0.0);
        assert_relative_eq!(single_geospreading_at(10.0, 1.0), -1.0, epsilon = 1e-15);
        assert_relative_eq!(single_geospreading_at(100.0, 0.5), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_single_geospreading_array() {
        let r = array![1.0, 10.0, 1000.0];
        let spreading = single_geospreading(&r, 1.0);
        for (value, expected) in spreading.iter().zip([0.0, -1.0, -3.0]) {
            assert_relative_eq!(*value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_geospreading_zero_distance() {
        assert_eq!(single_geospreading_at(0.0, 1.0), FloatValue::INFINITY);
        assert!(single_geospreading_at(-5.0, 1.0).is_nan());
    }
}
