//! Physical earthquake source parameters
//!
//! Point-source relations between seismic moment, moment magnitude, corner
//! frequency and stress drop, plus the factor that scales a far-field
//! displacement spectrum to seismic moment.
//!
//! Inputs are not validated. Non-positive moments or a negative
//! $\Delta\sigma / M_0$ ratio produce `NaN` or infinities, as the underlying
//! `log10`/`powf` do.

use crate::units::UnitSystem;
use crate::FloatValue;
use std::f64::consts::PI;

/// Seismic moment from moment magnitude (Hanks and Kanamori, 1979)
///
/// $$M_0 = 10^{\frac{3}{2}(M_w + c)}$$
///
/// `c` is 6.0333 for N m and 10.7 for dyne-cm (see [`UnitSystem`]).
pub fn mo_from_mw(mw: FloatValue, c: FloatValue) -> FloatValue {
    10.0_f64.powf(1.5 * (mw + c))
}

/// Moment magnitude from seismic moment (Hanks and Kanamori, 1979)
///
/// $$M_w = \frac{2}{3}\log_{10}(M_0) - c$$
///
/// This is the exact inverse of [`mo_from_mw`] for the same `c`.
/// Returns `-inf` for `mo == 0` and `NaN` for negative moments.
pub fn mw(mo: FloatValue, c: FloatValue) -> FloatValue {
    (2.0 / 3.0) * mo.log10() - c
}

/// [`mo_from_mw`] using the constant of a unit system
pub fn mo_from_mw_in(mw: FloatValue, units: UnitSystem) -> FloatValue {
    mo_from_mw(mw, units.magnitude_constant())
}

/// [`mw`] using the constant of a unit system
pub fn mw_in(mo: FloatValue, units: UnitSystem) -> FloatValue {
    mw(mo, units.magnitude_constant())
}

/// Corner frequency assuming constant stress drop (Aki, 1967; Brune, 1970, 1971)
///
/// $$f_c = c \beta \left(\frac{\Delta\sigma}{M_0}\right)^{1/3}$$
///
/// # Arguments
///
/// * `vs` - Shear-wave velocity at the source (m/s or km/s)
/// * `sd` - Stress drop (Pa or bar)
/// * `mo` - Seismic moment (N m or dyne-cm)
/// * `c` - Self-similar scaling constant, 0.49 for SI and 4.9e6 for cgs
///
/// The cube root uses `powf`, so a negative `sd / mo` yields `NaN` rather than
/// a negative real root.
pub fn fc(vs: FloatValue, sd: FloatValue, mo: FloatValue, c: FloatValue) -> FloatValue {
    c * vs * (sd / mo).powf(1.0 / 3.0)
}

/// [`fc`] using the constant of a unit system
pub fn fc_in(vs: FloatValue, sd: FloatValue, mo: FloatValue, units: UnitSystem) -> FloatValue {
    fc(vs, sd, mo, units.corner_frequency_constant())
}

/// Stress drop for a circular crack (Eshelby, 1957; Aki, 1967; Brune, 1970, 1971)
///
/// $$\Delta\sigma = \frac{7}{16} M_0 \left(\frac{f_c}{k \beta}\right)^3$$
///
/// `k` depends on the wave type, see [`crate::units::WaveType`].
/// This is not the inverse of [`fc`]: the two relations use different constants.
pub fn sd(fc: FloatValue, mo: FloatValue, vs: FloatValue, k: FloatValue) -> FloatValue {
    (7.0 / 16.0) * mo * (fc / (k * vs)).powi(3)
}

/// Displacement to moment scaling factor at the source (log10 units)
///
/// $$\log_{10}\left(\frac{4 \pi \beta^3 \rho R_0}{F_s R_p}\right)$$
///
/// # Arguments
///
/// * `vs` - Shear-wave velocity at the source
/// * `rho` - Density at the source
/// * `ro` - Reference distance from the source
/// * `fs` - Free surface amplification (2 for SH waves)
/// * `rp` - Average radiation coefficient (Boore and Boatwright, 1984)
pub fn moment_scaling(
    vs: FloatValue,
    rho: FloatValue,
    ro: FloatValue,
    fs: FloatValue,
    rp: FloatValue,
) -> FloatValue {
    ((4.0 * PI * vs.powi(3) * rho * ro) / (fs * rp)).log10()
}
