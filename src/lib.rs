//! Leaf and canopy radiative-transfer simulation toolkit.
//!
//! `chloris` wraps a native PROSPECT-D/4SAIL solver build (the
//! [`kernel::RtKernel`] trait) with a human-friendly layer: named trait
//! parameters with empirically grounded defaults, reproducible random
//! samplers for those traits, and two simulation entry points that
//! assemble the solver's positional call vectors and reshape its output.
//!
//! ```no_run
//! use chloris::{CanopyParams, Lidf, simulate_canopy};
//!
//! # struct MyKernelBuild;
//! # impl chloris::RtKernel for MyKernelBuild {
//! #     fn leaf(&self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64) -> Vec<(f64, f64)> { vec![] }
//! #     fn canopy(&self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64, _: i32, _: f64, _: f64) -> Vec<f64> { vec![] }
//! # }
//! let kernel = MyKernelBuild;
//! let params = CanopyParams {
//!     lai: 4.2,
//!     lidf: Lidf::PLANOPHILE,
//!     ..CanopyParams::default()
//! };
//!
//! let reflectance = simulate_canopy(&kernel, &params)?;
//! assert_eq!(reflectance.len(), chloris::parameters::N_WAVELENGTHS);
//! # Ok::<(), chloris::SimulationError>(())
//! ```

pub mod kernel;
pub mod lidf;
pub mod parameters;
pub mod samplers;
pub mod simulators;

pub use kernel::RtKernel;
pub use lidf::Lidf;
pub use samplers::{NormalSampler, Sampler, SamplerError, UniformSampler};
pub use simulators::{
    CanopyParams, LeafParams, LeafSpectrum, ParamsError, SimulationError, simulate_canopy,
    simulate_leaf,
};
