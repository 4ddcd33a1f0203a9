use chloris::parameters::{N_WAVELENGTHS, WAVELENGTHS};
use chloris::{LeafParams, RtKernel, simulate_leaf};

/// Analytic stand-in for a linked PROSPECT-D build, so the demo runs
/// without the native solver. Swap in your own [`RtKernel`]
/// implementation for real spectra.
struct DemoKernel;

impl RtKernel for DemoKernel {
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
        vec![0.0; N_WAVELENGTHS]
    }
}

fn main() {
    let params = LeafParams {
        chl: 55.0,
        ewt: 0.02,
        ..LeafParams::default()
    };

    let spectrum = match simulate_leaf(&DemoKernel, &params, true) {
        Ok(spectrum) => spectrum,
        Err(e) => {
            eprintln!("Leaf simulation failed: {}", e);
            return;
        }
    };

    let reflectance = spectrum.reflectance();
    let transmittance = spectrum.transmittance().expect("stacked output requested");

    println!("Leaf spectrum over {} bands", reflectance.len());
    println!(
        "  Reflectance min/max: {:.4} / {:.4}",
        reflectance.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
        reflectance.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
    );
    println!(
        "  Transmittance min/max: {:.4} / {:.4}",
        transmittance.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
        transmittance.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
    );
    println!(
        "  First 5 reflectance values: {:?}",
        reflectance.iter().take(5).collect::<Vec<&f64>>()
    );
}
