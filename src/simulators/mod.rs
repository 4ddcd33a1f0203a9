//! Leaf and canopy spectra simulation.
//!
//! The two entry points translate named trait parameters into the exact
//! positional argument vectors the native PROSPECT-D/4SAIL kernel
//! expects, derive the relative azimuth, encode the leaf inclination
//! distribution, and reshape the kernel's output. Neither retains state
//! between calls: each invocation is a pure function of its inputs and
//! the kernel's behavior, so concurrent calls are safe whenever the
//! kernel implementation is reentrant.
//!
//! Source: Feret, Gitelson, Noble & Jacquemoud (2017). PROSPECT-D:
//! Towards modeling leaf optical properties through a complete lifecycle.
//! <http://doi.org/10.1016/j.rse.2017.03.004>

use crate::kernel::RtKernel;
use crate::parameters::N_WAVELENGTHS;

pub mod error;
pub use error::{ParamsError, SimulationError};

pub mod params;
pub use params::{CanopyParams, LeafParams};

// Brown pigment content handed to the kernel. No empirically grounded
// default exists for it, so it stays pinned at zero and is not exposed.
const CBROWN: f64 = 0.0;

/// Result of a leaf simulation: reflectance alone, or reflectance and
/// transmittance stacked with the reflectance row first.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafSpectrum {
    Reflectance(Vec<f64>),
    Stacked {
        reflectance: Vec<f64>,
        transmittance: Vec<f64>,
    },
}

impl LeafSpectrum {
    pub fn reflectance(&self) -> &[f64] {
        match self {
            LeafSpectrum::Reflectance(reflectance) => reflectance,
            LeafSpectrum::Stacked { reflectance, .. } => reflectance,
        }
    }

    pub fn transmittance(&self) -> Option<&[f64]> {
        match self {
            LeafSpectrum::Reflectance(_) => None,
            LeafSpectrum::Stacked { transmittance, .. } => Some(transmittance),
        }
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<f64, SimulationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationError::NonFinite { name, value })
    }
}

fn check_spectrum_length(actual: usize) -> Result<(), SimulationError> {
    if actual == N_WAVELENGTHS {
        Ok(())
    } else {
        Err(SimulationError::SpectrumLength {
            expected: N_WAVELENGTHS,
            actual,
        })
    }
}

/// Simulate a leaf reflectance profile from structural/functional traits.
///
/// With `transmittance` set, the result stacks the transmittance spectrum
/// under the reflectance spectrum; otherwise only reflectance is
/// returned. Either way every spectrum has one value per wavelength of
/// [`crate::parameters::WAVELENGTHS`].
pub fn simulate_leaf(
    kernel: &impl RtKernel,
    params: &LeafParams,
    transmittance: bool,
) -> Result<LeafSpectrum, SimulationError> {
    let chl = ensure_finite("chl", params.chl)?;
    let car = ensure_finite("car", params.car)?;
    let antho = ensure_finite("antho", params.antho)?;
    let ewt = ensure_finite("ewt", params.ewt)?;
    let lma = ensure_finite("lma", params.lma)?;
    let n = ensure_finite("n", params.n)?;

    let pairs = kernel.leaf(n, chl, car, antho, CBROWN, ewt, lma);
    check_spectrum_length(pairs.len())?;

    let (reflectance, trans): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

    if transmittance {
        Ok(LeafSpectrum::Stacked {
            reflectance,
            transmittance: trans,
        })
    } else {
        Ok(LeafSpectrum::Reflectance(reflectance))
    }
}

/// Simulate a canopy reflectance profile from structural/functional
/// traits and viewing geometry.
///
/// The relative azimuth handed to the kernel is
/// `|view_azimuth - solar_azimuth|`. Transmittance is not produced at
/// canopy scale in this model.
pub fn simulate_canopy(
    kernel: &impl RtKernel,
    params: &CanopyParams,
) -> Result<Vec<f64>, SimulationError> {
    let chl = ensure_finite("chl", params.leaf.chl)?;
    let car = ensure_finite("car", params.leaf.car)?;
    let antho = ensure_finite("antho", params.leaf.antho)?;
    let ewt = ensure_finite("ewt", params.leaf.ewt)?;
    let lma = ensure_finite("lma", params.leaf.lma)?;
    let n = ensure_finite("n", params.leaf.n)?;
    let lai = ensure_finite("lai", params.lai)?;
    let soil_dryness = ensure_finite("soil_dryness", params.soil_dryness)?;
    let solar_zenith = ensure_finite("solar_zenith", params.solar_zenith)?;
    let solar_azimuth = ensure_finite("solar_azimuth", params.solar_azimuth)?;
    let view_zenith = ensure_finite("view_zenith", params.view_zenith)?;
    let view_azimuth = ensure_finite("view_azimuth", params.view_azimuth)?;
    let hot_spot = ensure_finite("hot_spot", params.hot_spot)?;

    let psi = (view_azimuth - solar_azimuth).abs();

    let (leaf_type, leaf_slope, leaf_modality) = params.lidf.kernel_encoding();
    let leaf_slope = ensure_finite("leaf_slope", leaf_slope)?;
    let leaf_modality = ensure_finite("leaf_modality", leaf_modality)?;

    let reflectance = kernel.canopy(
        n,
        chl,
        car,
        antho,
        CBROWN,
        ewt,
        lma,
        soil_dryness,
        lai,
        hot_spot,
        solar_zenith,
        view_zenith,
        psi,
        leaf_type,
        leaf_slope,
        leaf_modality,
    );
    check_spectrum_length(reflectance.len())?;

    Ok(reflectance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lidf::Lidf;
    use crate::parameters::WAVELENGTHS;
    use std::cell::RefCell;

    // Analytic stand-in for the native kernel: wavelength-shaped, finite,
    // with reflectance and transmittance deliberately distinct.
    struct ToyKernel;

    impl RtKernel for ToyKernel {
        fn leaf(
            &self,
            n: f64,
            chl: f64,
            car: f64,
            antho: f64,
            _cbrown: f64,
            ewt: f64,
            lma: f64,
        ) -> Vec<(f64, f64)> {
            WAVELENGTHS
                .iter()
                .map(|&wl| {
                    let pigment = chl * 0.012 + car * 0.004 + antho * 0.002;
                    let absorbed = (pigment * (2.6 - wl)).tanh().abs();
                    let refl = (1.0 - absorbed) * (0.3 + 0.1 * (n - 1.0));
                    let trans = (1.0 - absorbed) * (0.45 - 0.1 * ewt - 0.05 * lma);
                    (refl, trans)
                })
                .collect()
        }

        #[allow(clippy::too_many_arguments)]
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
            _hot_spot: f64,
            _solar_zenith: f64,
            _view_zenith: f64,
            _psi: f64,
            _leaf_type: i32,
            _leaf_slope: f64,
            _leaf_modality: f64,
        ) -> Vec<f64> {
            let gap = (-0.5 * lai).exp();
            self.leaf(n, chl, car, antho, cbrown, ewt, lma)
                .iter()
                .zip(WAVELENGTHS.iter())
                .map(|(&(refl, _), &wl)| {
                    let soil = 0.1 + 0.2 * soil_dryness * wl / 2.5;
                    refl * (1.0 - gap) + soil * gap
                })
                .collect()
        }
    }

    // Records the canopy argument vector so tests can check the exact
    // values handed to the kernel.
    #[derive(Default)]
    struct RecordingKernel {
        canopy_args: RefCell<Vec<f64>>,
        leaf_type: RefCell<i32>,
    }

    impl RtKernel for RecordingKernel {
        fn leaf(
            &self,
            _n: f64,
            _chl: f64,
            _car: f64,
            _antho: f64,
            cbrown: f64,
            _ewt: f64,
            _lma: f64,
        ) -> Vec<(f64, f64)> {
            self.canopy_args.borrow_mut().push(cbrown);
            vec![(0.1, 0.2); N_WAVELENGTHS]
        }

        #[allow(clippy::too_many_arguments)]
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
        ) -> Vec<f64> {
            *self.canopy_args.borrow_mut() = vec![
                n,
                chl,
                car,
                antho,
                cbrown,
                ewt,
                lma,
                soil_dryness,
                lai,
                hot_spot,
                solar_zenith,
                view_zenith,
                psi,
                leaf_slope,
                leaf_modality,
            ];
            *self.leaf_type.borrow_mut() = leaf_type;
            vec![0.1; N_WAVELENGTHS]
        }
    }

    // Kernel that returns too few bands.
    struct TruncatedKernel;

    impl RtKernel for TruncatedKernel {
        fn leaf(
            &self,
            _n: f64,
            _chl: f64,
            _car: f64,
            _antho: f64,
            _cbrown: f64,
            _ewt: f64,
            _lma: f64,
        ) -> Vec<(f64, f64)> {
            vec![(0.1, 0.2); 100]
        }

        #[allow(clippy::too_many_arguments)]
        fn canopy(
            &self,
            _n: f64,
            _chl: f64,
            _car: f64,
            _antho: f64,
            _cbrown: f64,
            _ewt: f64,
            _lma: f64,
            _soil_dryness: f64,
            _lai: f64,
            _hot_spot: f64,
            _solar_zenith: f64,
            _view_zenith: f64,
            _psi: f64,
            _leaf_type: i32,
            _leaf_slope: f64,
            _leaf_modality: f64,
        ) -> Vec<f64> {
            vec![0.1; 100]
        }
    }

    #[test]
    fn leaf_reflectance_shape_and_finiteness() {
        let spectrum = simulate_leaf(&ToyKernel, &LeafParams::default(), false).unwrap();

        let reflectance = spectrum.reflectance();
        assert_eq!(reflectance.len(), N_WAVELENGTHS);
        assert!(reflectance.iter().all(|v| v.is_finite()));
        assert!(spectrum.transmittance().is_none());
    }

    #[test]
    fn leaf_transmittance_is_distinct_from_reflectance() {
        let spectrum = simulate_leaf(&ToyKernel, &LeafParams::default(), true).unwrap();

        let reflectance = spectrum.reflectance();
        let transmittance = spectrum.transmittance().unwrap();

        assert_eq!(reflectance.len(), N_WAVELENGTHS);
        assert_eq!(transmittance.len(), N_WAVELENGTHS);
        assert!(
            reflectance
                .iter()
                .zip(transmittance)
                .any(|(refl, trans)| refl != trans)
        );
    }

    #[test]
    fn canopy_default_shape() {
        let reflectance = simulate_canopy(&ToyKernel, &CanopyParams::default()).unwrap();

        assert_eq!(reflectance.len(), N_WAVELENGTHS);
        assert!(reflectance.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn canopy_accepts_both_lidf_shapes() {
        let mut params = CanopyParams::default();

        params.lidf = 33.0.into();
        let scalar = simulate_canopy(&ToyKernel, &params).unwrap();
        assert_eq!(scalar.len(), N_WAVELENGTHS);

        params.lidf = (0.0, 0.0).into();
        let pair = simulate_canopy(&ToyKernel, &params).unwrap();
        assert_eq!(pair.len(), N_WAVELENGTHS);
    }

    #[test]
    fn canopy_derives_relative_azimuth() {
        let kernel = RecordingKernel::default();
        let params = CanopyParams {
            solar_azimuth: 120.0,
            view_azimuth: 60.0,
            ..CanopyParams::default()
        };

        simulate_canopy(&kernel, &params).unwrap();

        let args = kernel.canopy_args.borrow();
        let psi = args[12];
        assert_eq!(psi, 60.0);
    }

    #[test]
    fn brown_pigment_pinned_to_zero() {
        let kernel = RecordingKernel::default();

        simulate_leaf(&kernel, &LeafParams::default(), false).unwrap();
        assert_eq!(kernel.canopy_args.borrow()[0], 0.0);

        simulate_canopy(&kernel, &CanopyParams::default()).unwrap();
        let args = kernel.canopy_args.borrow();
        let cbrown = args[4];
        assert_eq!(cbrown, 0.0);
    }

    #[test]
    fn lidf_encodings_reach_the_kernel() {
        let kernel = RecordingKernel::default();
        let mut params = CanopyParams::default();

        params.lidf = Lidf::AverageAngle(33.0);
        simulate_canopy(&kernel, &params).unwrap();
        assert_eq!(*kernel.leaf_type.borrow(), 2);
        assert_eq!(kernel.canopy_args.borrow()[13], 33.0);
        assert_eq!(kernel.canopy_args.borrow()[14], 0.0);

        params.lidf = Lidf::SPHERICAL;
        simulate_canopy(&kernel, &params).unwrap();
        assert_eq!(*kernel.leaf_type.borrow(), 1);
        assert_eq!(kernel.canopy_args.borrow()[13], -0.35);
        assert_eq!(kernel.canopy_args.borrow()[14], -0.15);
    }

    #[test]
    fn non_finite_trait_is_rejected() {
        let params = LeafParams {
            chl: f64::NAN,
            ..LeafParams::default()
        };

        assert!(matches!(
            simulate_leaf(&ToyKernel, &params, false),
            Err(SimulationError::NonFinite { name: "chl", .. })
        ));

        let params = CanopyParams {
            lai: f64::INFINITY,
            ..CanopyParams::default()
        };

        assert!(matches!(
            simulate_canopy(&ToyKernel, &params),
            Err(SimulationError::NonFinite { name: "lai", .. })
        ));
    }

    #[test]
    fn wrong_kernel_output_length_is_rejected() {
        assert!(matches!(
            simulate_leaf(&TruncatedKernel, &LeafParams::default(), false),
            Err(SimulationError::SpectrumLength {
                expected: N_WAVELENGTHS,
                actual: 100
            })
        ));

        assert!(matches!(
            simulate_canopy(&TruncatedKernel, &CanopyParams::default()),
            Err(SimulationError::SpectrumLength { .. })
        ));
    }
}
