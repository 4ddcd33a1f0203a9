//! Leaf inclination distribution functions (LIDF).
//!
//! The canopy model accepts two alternative descriptions of leaf
//! orientation: a single average leaf angle in degrees, or a parametric
//! (slope, bimodality) pair after Verhoef. Both are unified here as one
//! sum type, resolved once at the API boundary and matched exhaustively
//! when the kernel call vector is assembled.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lidf {
    /// Explicit average leaf angle, degrees.
    AverageAngle(f64),
    /// Parametric orientation distribution: average leaf slope and
    /// bimodality, which together describe a physical archetype.
    SlopeBimodality { slope: f64, bimodality: f64 },
}

impl Lidf {
    pub const ERECTOPHILE: Self = Self::SlopeBimodality {
        slope: -1.0,
        bimodality: 0.0,
    };
    pub const EXTREMOPHILE: Self = Self::SlopeBimodality {
        slope: 0.0,
        bimodality: 1.0,
    };
    pub const PLAGIOPHILE: Self = Self::SlopeBimodality {
        slope: 0.0,
        bimodality: -1.0,
    };
    pub const PLANOPHILE: Self = Self::SlopeBimodality {
        slope: 1.0,
        bimodality: 0.0,
    };
    pub const SPHERICAL: Self = Self::SlopeBimodality {
        slope: -0.35,
        bimodality: -0.15,
    };
    pub const UNIFORM: Self = Self::SlopeBimodality {
        slope: 0.0,
        bimodality: 0.0,
    };

    /// All named orientation presets.
    pub fn presets() -> [(&'static str, Lidf); 6] {
        [
            ("erectophile", Self::ERECTOPHILE),
            ("extremophile", Self::EXTREMOPHILE),
            ("plagiophile", Self::PLAGIOPHILE),
            ("planophile", Self::PLANOPHILE),
            ("spherical", Self::SPHERICAL),
            ("uniform", Self::UNIFORM),
        ]
    }

    /// Encode for the kernel call vector as
    /// (leaf type discriminator, slope, modality).
    pub(crate) fn kernel_encoding(self) -> (i32, f64, f64) {
        match self {
            Lidf::AverageAngle(angle) => (2, angle, 0.0),
            Lidf::SlopeBimodality { slope, bimodality } => (1, slope, bimodality),
        }
    }
}

/// Near-spherical leaf orientation, the usual default.
impl Default for Lidf {
    fn default() -> Self {
        Self::SPHERICAL
    }
}

impl From<f64> for Lidf {
    fn from(angle: f64) -> Self {
        Self::AverageAngle(angle)
    }
}

impl From<(f64, f64)> for Lidf {
    fn from((slope, bimodality): (f64, f64)) -> Self {
        Self::SlopeBimodality { slope, bimodality }
    }
}

// Scenario files spell a LIDF either as a bare number (average angle) or
// as a two-element array (slope, bimodality); anything else is a shape
// error.
impl<'de> Deserialize<'de> for Lidf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LidfHelper {
            Pair(f64, f64),
            Angle(f64),
        }

        Ok(match LidfHelper::deserialize(deserializer)? {
            LidfHelper::Pair(slope, bimodality) => Lidf::SlopeBimodality { slope, bimodality },
            LidfHelper::Angle(angle) => Lidf::AverageAngle(angle),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_presets() {
        assert_eq!(Lidf::presets().len(), 6);
        assert_eq!(
            Lidf::SPHERICAL,
            Lidf::SlopeBimodality {
                slope: -0.35,
                bimodality: -0.15
            }
        );
    }

    #[test]
    fn scalar_encodes_as_average_angle() {
        let lidf: Lidf = 33.0.into();
        assert_eq!(lidf.kernel_encoding(), (2, 33.0, 0.0));
    }

    #[test]
    fn pair_encodes_as_slope_bimodality() {
        let lidf: Lidf = (0.0, 1.0).into();
        assert_eq!(lidf.kernel_encoding(), (1, 0.0, 1.0));
    }

    #[test]
    fn deserializes_from_number_or_pair() {
        let angle: Lidf = serde_json::from_str("33").unwrap();
        assert_eq!(angle, Lidf::AverageAngle(33.0));

        let pair: Lidf = serde_json::from_str("[-0.35, -0.15]").unwrap();
        assert_eq!(pair, Lidf::SPHERICAL);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_str::<Lidf>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Lidf>("\"spherical\"").is_err());
    }
}
