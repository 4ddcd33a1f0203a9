use chloris::parameters::{N_WAVELENGTHS, WAVELENGTHS};
use chloris::{CanopyParams, Lidf, RtKernel, simulate_canopy};

/// Analytic stand-in for a linked PRO4SAIL build: a dense canopy damps
/// the soil line, a dry soil brightens it. Swap in your own [`RtKernel`]
/// implementation for real spectra.
struct DemoKernel;

impl RtKernel for DemoKernel {
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
        vec![(0.0, 0.0); N_WAVELENGTHS]
    }

    #[allow(clippy::too_many_arguments)]
    fn canopy(
        &self,
        n: f64,
        chl: f64,
        car: f64,
        antho: f64,
        _cbrown: f64,
        _ewt: f64,
        _lma: f64,
        soil_dryness: f64,
        lai: f64,
        _hot_spot: f64,
        solar_zenith: f64,
        _view_zenith: f64,
        _psi: f64,
        _leaf_type: i32,
        leaf_slope: f64,
        _leaf_modality: f64,
    ) -> Vec<f64> {
        let gap = (-0.5 * lai).exp();
        let sun = solar_zenith.to_radians().cos().max(0.1);

        WAVELENGTHS
            .iter()
            .map(|&wl| {
                let pigment = chl * 0.012 + car * 0.004 + antho * 0.002;
                let absorbed = (pigment * (2.6 - wl)).tanh().abs();
                let leaf = (1.0 - absorbed) * (0.3 + 0.1 * (n - 1.0));
                let soil = 0.1 + 0.2 * soil_dryness * wl / 2.5;
                let geometry = 1.0 + 0.05 * leaf_slope;

                (leaf * (1.0 - gap) + soil * gap) * sun * geometry
            })
            .collect()
    }
}

fn stats(label: &str, reflectance: &[f64]) {
    println!(
        "{label}: {} bands, min {:.4}, max {:.4}, mean {:.4}",
        reflectance.len(),
        reflectance.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
        reflectance.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
        reflectance.iter().sum::<f64>() / reflectance.len() as f64
    );
}

fn main() {
    // An optional JSON scenario file overrides the defaults.
    let params = match std::env::args().nth(1) {
        Some(path) => match CanopyParams::from_file(&path) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("Failed to load scenario {}: {}", path, e);
                return;
            }
        },
        None => CanopyParams::default(),
    };

    match simulate_canopy(&DemoKernel, &params) {
        Ok(reflectance) => stats("spherical canopy", &reflectance),
        Err(e) => eprintln!("Canopy simulation failed: {}", e),
    }

    // The LIDF accepts a bare average angle as well as a preset pair.
    let erect = CanopyParams {
        lidf: Lidf::AverageAngle(75.0),
        ..params
    };

    match simulate_canopy(&DemoKernel, &erect) {
        Ok(reflectance) => stats("75-degree leaves", &reflectance),
        Err(e) => eprintln!("Canopy simulation failed: {}", e),
    }
}
