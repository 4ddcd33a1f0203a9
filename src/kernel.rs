//! Call contract of the native radiative-transfer solver.
//!
//! The numerically heavy PROSPECT-D (leaf) and 4SAIL (canopy) code is an
//! external collaborator, typically a compiled Fortran build linked into
//! the host application. This crate never reimplements it; it only
//! assembles the solver's positional argument vectors and reshapes its
//! output. Implement [`RtKernel`] over your kernel build to drive the
//! simulators, or over a cheap analytic stand-in for testing.
//!
//! Both entry points are expected to be deterministic for identical
//! inputs and to emit one value (or pair) per wavelength of the fixed
//! grid in [`crate::parameters::WAVELENGTHS`], in grid order.

/// Radiative-transfer kernel entry points.
///
/// Argument order is fixed by the native solver and must not be
/// rearranged.
#[allow(clippy::too_many_arguments)]
pub trait RtKernel {
    /// PROSPECT-D leaf optics: returns one (reflectance, transmittance)
    /// pair per wavelength.
    fn leaf(
        &self,
        n: f64,
        chl: f64,
        car: f64,
        antho: f64,
        cbrown: f64,
        ewt: f64,
        lma: f64,
    ) -> Vec<(f64, f64)>;

    /// PRO4SAIL canopy reflectance: returns one reflectance per
    /// wavelength. `psi` is the relative azimuth between view and solar
    /// directions; `leaf_type` discriminates the two LIDF encodings
    /// (1 = slope/bimodality pair, 2 = explicit average angle).
    fn canopy(
        &self,
        n: f64,
        chl: f64,
        car: f64,
        antho: f64,
        cbrown: f64,
        ewt: f64,
        lma: f64,
        soil_dryness: f64,
        lai: f64,
        hot_spot: f64,
        solar_zenith: f64,
        view_zenith: f64,
        psi: f64,
        leaf_type: i32,
        leaf_slope: f64,
        leaf_modality: f64,
    ) -> Vec<f64>;
}
