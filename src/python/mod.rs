//! Python bindings
//!
//! Exposes the formulas as `eqstochsim._lib` with the same names and keyword
//! defaults as the `eqstochsim` Python package. Frequency and distance
//! arguments are numbers or float64 numpy arrays of any shape; the result
//! has the same form.

use eqstochsim_core::errors::EqPhysicsError;
use eqstochsim_core::units::{
    CORNER_FREQUENCY_CONSTANT_SI, MAGNITUDE_CONSTANT_SI, S_WAVE_K,
};
use eqstochsim_core::spectra::Motion;
use eqstochsim_core::{attenuation, source, spectra, FloatValue};
use numpy::ndarray::ArrayD;
use numpy::{IntoPyArray, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: EqPhysicsError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyfunction]
#[pyo3(signature = (mw, c=MAGNITUDE_CONSTANT_SI))]
fn mo_from_mw(mw: FloatValue, c: FloatValue) -> FloatValue {
    source::mo_from_mw(mw, c)
}

#[pyfunction]
#[pyo3(signature = (mo, c=MAGNITUDE_CONSTANT_SI))]
fn mw(mo: FloatValue, c: FloatValue) -> FloatValue {
    source::mw(mo, c)
}

#[pyfunction]
#[pyo3(signature = (vs, sd, mo, c=CORNER_FREQUENCY_CONSTANT_SI))]
fn fc(vs: FloatValue, sd: FloatValue, mo: FloatValue, c: FloatValue) -> FloatValue {
    source::fc(vs, sd, mo, c)
}

#[pyfunction]
#[pyo3(signature = (fc, mo, vs, k=S_WAVE_K))]
fn sd(fc: FloatValue, mo: FloatValue, vs: FloatValue, k: FloatValue) -> FloatValue {
    source::sd(fc, mo, vs, k)
}

#[pyfunction]
#[pyo3(signature = (vs=3500.0, rho=2600.0, ro=1000.0, fs=2.0, rp=0.55))]
fn moment_scaling(
    vs: FloatValue,
    rho: FloatValue,
    ro: FloatValue,
    fs: FloatValue,
    rp: FloatValue,
) -> FloatValue {
    source::moment_scaling(vs, rho, ro, fs, rp)
}

/// Frequency or distance argument: a number or a float64 numpy array
///
/// Numbers give numbers back, arrays give arrays of the same shape.
#[derive(FromPyObject)]
enum FloatOrArray<'py> {
    Array(PyReadonlyArrayDyn<'py, FloatValue>),
    Scalar(FloatValue),
}

fn array_to_py<'py>(py: Python<'py>, values: ArrayD<FloatValue>) -> PyObject {
    values.into_pyarray_bound(py).into_any().unbind()
}

#[pyfunction]
fn source_scf<'py>(
    py: Python<'py>,
    f: FloatOrArray<'py>,
    llpsp: FloatValue,
    fc: FloatValue,
    gam: FloatValue,
    n: FloatValue,
) -> PyObject {
    match f {
        FloatOrArray::Array(f) => array_to_py(py, spectra::source_scf(&f.as_array(), llpsp, fc, gam, n)),
        FloatOrArray::Scalar(f) => spectra::source_scf_at(f, llpsp, fc, gam, n).into_py(py),
    }
}

/// Raises `ValueError` for anything other than 'disp', 'vel' or 'acc'.
#[pyfunction]
#[pyo3(signature = (f, motion="disp"))]
fn motion_factor<'py>(py: Python<'py>, f: FloatOrArray<'py>, motion: &str) -> PyResult<PyObject> {
    let motion: Motion = motion.parse().map_err(to_py_err)?;
    Ok(match f {
        FloatOrArray::Array(f) => array_to_py(py, spectra::motion_factor_for(&f.as_array(), motion)),
        FloatOrArray::Scalar(f) => spectra::motion_factor_at(f, motion).into_py(py),
    })
}

#[pyfunction]
#[pyo3(name = "f_idep_attenutation")]
#[allow(non_snake_case)]
fn f_idep_attenuation<'py>(
    py: Python<'py>,
    f: FloatOrArray<'py>,
    Q: FloatValue,
    R: FloatValue,
    b: FloatValue,
) -> PyObject {
    match f {
        FloatOrArray::Array(f) => array_to_py(py, attenuation::f_idep_attenuation(&f.as_array(), Q, R, b)),
        FloatOrArray::Scalar(f) => attenuation::f_idep_attenuation_at(f, Q, R, b).into_py(py),
    }
}

/// Raises `ValueError` unless `0 <= a < 1`.
#[pyfunction]
#[allow(non_snake_case)]
fn f_dep_attenuation<'py>(
    py: Python<'py>,
    f: FloatOrArray<'py>,
    a: FloatValue,
    Q: FloatValue,
    R: FloatValue,
    b: FloatValue,
) -> PyResult<PyObject> {
    Ok(match f {
        FloatOrArray::Array(f) => {
            let atten = attenuation::f_dep_attenuation(&f.as_array(), a, Q, R, b).map_err(to_py_err)?;
            array_to_py(py, atten)
        }
        FloatOrArray::Scalar(f) => attenuation::f_dep_attenuation_at(f, a, Q, R, b)
            .map_err(to_py_err)?
            .into_py(py),
    })
}

#[pyfunction]
#[pyo3(signature = (R, p=1.0))]
#[allow(non_snake_case)]
fn single_geospreading<'py>(py: Python<'py>, R: FloatOrArray<'py>, p: FloatValue) -> PyObject {
    match R {
        FloatOrArray::Array(r) => array_to_py(py, attenuation::single_geospreading(&r.as_array(), p)),
        FloatOrArray::Scalar(r) => attenuation::single_geospreading_at(r, p).into_py(py),
    }
}

#[pymodule]
#[pyo3(name = "_lib")]
fn eqstochsim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(mo_from_mw, m)?)?;
    m.add_function(wrap_pyfunction!(mw, m)?)?;
    m.add_function(wrap_pyfunction!(fc, m)?)?;
    m.add_function(wrap_pyfunction!(sd, m)?)?;
    m.add_function(wrap_pyfunction!(moment_scaling, m)?)?;
    m.add_function(wrap_pyfunction!(source_scf, m)?)?;
    m.add_function(wrap_pyfunction!(motion_factor, m)?)?;
    m.add_function(wrap_pyfunction!(f_idep_attenuation, m)?)?;
    m.add_function(wrap_pyfunction!(f_dep_attenuation, m)?)?;
    m.add_function(wrap_pyfunction!(single_geospreading, m)?)?;
    Ok(())
}
