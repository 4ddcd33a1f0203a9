//! Simulation parameter sets.
//!
//! Both structs carry domain-typical defaults, so a caller can tweak only
//! the traits they care about. They also deserialize from JSON scenario
//! files; omitted fields fall back to the same defaults, and the `lidf`
//! field accepts either a bare number (average leaf angle, degrees) or a
//! two-element array (slope, bimodality).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::error::ParamsError;
use crate::lidf::Lidf;

/// Leaf-scale traits for the PROSPECT-D kernel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeafParams {
    /// Chlorophyll a+b content (ug/cm2), typically ~5-85.
    pub chl: f64,
    /// Carotenoid content (ug/cm2), typically ~1/4 of chlorophyll.
    pub car: f64,
    /// Anthocyanin content (ug/cm2), typically ~1/10 of carotenoids.
    pub antho: f64,
    /// Equivalent water thickness (cm), typically ~0.002-0.05.
    pub ewt: f64,
    /// Leaf mass per unit area (g/cm2), typically ~0.002-0.036.
    pub lma: f64,
    /// Leaf structure parameter (unitless), typically 1-3.6.
    pub n: f64,
}

impl Default for LeafParams {
    fn default() -> Self {
        Self {
            chl: 40.0,
            car: 8.0,
            antho: 0.5,
            ewt: 0.01,
            lma: 0.009,
            n: 1.5,
        }
    }
}

impl LeafParams {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let params: LeafParams = serde_json::from_reader(reader)?;

        Ok(params)
    }
}

/// Canopy-scale traits and geometry for the PRO4SAIL kernel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanopyParams {
    /// Leaf traits of the canopy's foliage.
    pub leaf: LeafParams,
    /// Leaf area index (m2/m2); ~0.2-15 for forests, ~0.2-8.7 for crops.
    pub lai: f64,
    /// Leaf inclination distribution; see [`Lidf`] for the presets.
    pub lidf: Lidf,
    /// Fraction of dry soil: 1 fully dry, 0 fully wet.
    pub soil_dryness: f64,
    /// Solar zenith angle (degrees), typically ~10-70.
    pub solar_zenith: f64,
    /// Solar azimuth angle (degrees).
    pub solar_azimuth: f64,
    /// Sensor zenith angle (degrees); 0 for nadir-viewing instruments.
    pub view_zenith: f64,
    /// Sensor azimuth angle (degrees).
    pub view_azimuth: f64,
    /// Hot spot parameter (unitless).
    pub hot_spot: f64,
}

impl Default for CanopyParams {
    fn default() -> Self {
        Self {
            leaf: LeafParams::default(),
            lai: 3.0,
            lidf: Lidf::SPHERICAL,
            soil_dryness: 0.75,
            solar_zenith: 35.0,
            solar_azimuth: 120.0,
            view_zenith: 0.0,
            view_azimuth: 60.0,
            hot_spot: 0.01,
        }
    }
}

impl CanopyParams {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let params: CanopyParams = serde_json::from_reader(reader)?;

        Ok(params)
    }
}
