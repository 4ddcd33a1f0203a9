use std::fmt;

/// Errors raised while preparing or checking a simulation call. A
/// `NonFinite` means the caller passed a bad trait value; a
/// `SpectrumLength` means the kernel returned the wrong number of bands.
#[derive(Debug)]
pub enum SimulationError {
    NonFinite { name: &'static str, value: f64 },
    SpectrumLength { expected: usize, actual: usize },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::NonFinite { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
            SimulationError::SpectrumLength { expected, actual } => {
                write!(
                    f,
                    "kernel returned {} spectral values, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors raised while loading parameter sets from scenario files.
#[derive(Debug)]
pub enum ParamsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {}", e),
            ParamsError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ParamsError {}

impl From<std::io::Error> for ParamsError {
    fn from(err: std::io::Error) -> ParamsError {
        ParamsError::Io(err)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(err: serde_json::Error) -> ParamsError {
        ParamsError::Json(err)
    }
}
