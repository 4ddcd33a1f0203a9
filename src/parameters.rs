//! Reference spectral data and default trait samplers.
//!
//! The wavelength grid matches the native solver's output: 2101 bands
//! from 0.4 to 2.5 micrometers in 0.001 steps. Every simulation result
//! has exactly this length.
//!
//! Default sampler ranges come from published empirical distributions of
//! leaf and canopy traits:
//! - Feret, Gitelson, Noble & Jacquemoud (2017), PROSPECT-D.
//!   <http://doi.org/10.1016/j.rse.2017.03.004>
//! - Rivera, Verrelst, Leonenko & Moreno (2013).
//!   <https://www.mdpi.com/2072-4292/5/7/3280>
//! - Solar/view azimuth ranges from Landsat viewing-geometry coefficient
//!   files: <https://www.usgs.gov/landsat-missions/solar-illumination-and-sensor-viewing-angle-coefficient-files>
//!
//! The table is read-only and safe to share across threads; each lookup
//! hands back a fresh sampler instance the caller owns, since a sampler's
//! generator state mutates on every draw.

use std::sync::LazyLock;

use crate::samplers::{NormalSampler, Sampler, UniformSampler};

/// Number of spectral bands produced by the solver.
pub const N_WAVELENGTHS: usize = 2101;

/// Wavelength units for [`WAVELENGTHS`] and [`FWHMS`].
pub const UNITS: &str = "micrometers";

/// Band-center wavelengths, 0.4 to 2.5 micrometers in 0.001 steps.
pub static WAVELENGTHS: LazyLock<Vec<f64>> =
    LazyLock::new(|| (0..N_WAVELENGTHS).map(|i| 0.4 + i as f64 * 0.001).collect());

/// Full-width-half-maximum of each band (all 1.0).
pub static FWHMS: LazyLock<Vec<f64>> = LazyLock::new(|| vec![1.0; N_WAVELENGTHS]);

/// Trait identifiers accepted by [`default_sampler`].
pub const TRAIT_NAMES: [&str; 13] = [
    "anthocyanin",
    "carotenoid",
    "chlorophyll",
    "ewt",
    "lai_crop",
    "lai_forest",
    "lma",
    "soil_dryness",
    "solar_azimuth",
    "solar_zenith",
    "structure",
    "view_azimuth",
    "view_zenith",
];

// Constructor literals below are compile-time constants already checked
// against the sampler invariants, so construction cannot fail.
fn normal(mean: f64, stdv: f64, min: f64, max: f64) -> NormalSampler {
    NormalSampler::bounded(mean, stdv, min, max).expect("default trait distribution is valid")
}

fn uniform(min: f64, max: f64) -> UniformSampler {
    UniformSampler::new(min, max).expect("default trait range is valid")
}

/// Chlorophyll a+b content (ug/cm2).
pub fn chlorophyll_sampler() -> NormalSampler {
    normal(35.0, 30.0, 5.0, 85.0)
}

/// Carotenoid content (ug/cm2), roughly a quarter of chlorophyll a+b.
pub fn carotenoid_sampler() -> NormalSampler {
    normal(8.75, 7.5, 2.0, 15.0)
}

/// Anthocyanin content (ug/cm2).
pub fn anthocyanin_sampler() -> NormalSampler {
    normal(0.5, 0.1, 0.1, 1.0)
}

/// Equivalent water thickness (cm).
pub fn ewt_sampler() -> NormalSampler {
    normal(0.03, 0.01, 0.005, 0.05)
}

/// Leaf mass per unit area (g/cm2).
pub fn lma_sampler() -> NormalSampler {
    normal(0.012, 0.005, 0.005, 0.025)
}

/// Leaf structure parameter N (unitless).
pub fn structure_sampler() -> NormalSampler {
    normal(2.2, 0.3, 1.25, 3.6)
}

/// Leaf area index for crop canopies (m2/m2).
pub fn lai_crop_sampler() -> NormalSampler {
    normal(3.5, 2.0, 0.5, 8.7)
}

/// Leaf area index for forest canopies (m2/m2).
pub fn lai_forest_sampler() -> NormalSampler {
    normal(4.0, 2.5, 0.85, 15.0)
}

/// Fraction of dry soil, 1 fully dry and 0 fully wet.
pub fn soil_dryness_sampler() -> UniformSampler {
    uniform(0.0, 1.0)
}

/// Solar azimuth angle (degrees).
pub fn solar_azimuth_sampler() -> UniformSampler {
    uniform(70.0, 150.0)
}

/// Solar zenith angle (degrees).
pub fn solar_zenith_sampler() -> UniformSampler {
    uniform(10.0, 70.0)
}

/// Sensor azimuth angle (degrees).
pub fn view_azimuth_sampler() -> UniformSampler {
    uniform(-150.0, 150.0)
}

/// Sensor zenith angle (degrees); near 0 for nadir-viewing instruments.
pub fn view_zenith_sampler() -> UniformSampler {
    uniform(0.0, 10.0)
}

/// Look up the default sampler for a trait by name (see [`TRAIT_NAMES`]).
/// Returns a fresh instance on every call.
pub fn default_sampler(name: &str) -> Option<Box<dyn Sampler>> {
    let sampler: Box<dyn Sampler> = match name {
        "anthocyanin" => Box::new(anthocyanin_sampler()),
        "carotenoid" => Box::new(carotenoid_sampler()),
        "chlorophyll" => Box::new(chlorophyll_sampler()),
        "ewt" => Box::new(ewt_sampler()),
        "lai_crop" => Box::new(lai_crop_sampler()),
        "lai_forest" => Box::new(lai_forest_sampler()),
        "lma" => Box::new(lma_sampler()),
        "soil_dryness" => Box::new(soil_dryness_sampler()),
        "solar_azimuth" => Box::new(solar_azimuth_sampler()),
        "solar_zenith" => Box::new(solar_zenith_sampler()),
        "structure" => Box::new(structure_sampler()),
        "view_azimuth" => Box::new(view_azimuth_sampler()),
        "view_zenith" => Box::new(view_zenith_sampler()),
        _ => return None,
    };

    Some(sampler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wavelength_grid_shape() {
        assert_eq!(WAVELENGTHS.len(), N_WAVELENGTHS);
        assert_eq!(FWHMS.len(), N_WAVELENGTHS);

        assert!((WAVELENGTHS[0] - 0.4).abs() < 1e-12);
        assert!((WAVELENGTHS[N_WAVELENGTHS - 1] - 2.5).abs() < 1e-9);
        assert!((WAVELENGTHS[1] - WAVELENGTHS[0] - 0.001).abs() < 1e-12);
    }

    #[test]
    fn registry_covers_every_trait_name() {
        for name in TRAIT_NAMES {
            assert!(default_sampler(name).is_some(), "missing sampler: {name}");
        }

        assert!(default_sampler("albedo").is_none());
    }

    #[test]
    fn registry_lookups_are_independent_instances() {
        let mut a = default_sampler("chlorophyll").unwrap();
        let mut b = default_sampler("chlorophyll").unwrap();

        // Advancing one does not advance the other.
        let first = a.sample().unwrap();
        let _ = a.sample().unwrap();
        assert_eq!(b.sample().unwrap(), first);
    }

    #[test]
    fn default_draws_stay_in_empirical_ranges() {
        let mut chl = chlorophyll_sampler();
        let mut soil = soil_dryness_sampler();

        for _ in 0..100 {
            let c = chl.sample().unwrap();
            assert!((5.0..=85.0).contains(&c), "{c}");

            let s = Sampler::sample(&mut soil).unwrap();
            assert!((0.0..1.0).contains(&s), "{s}");
        }
    }
}
