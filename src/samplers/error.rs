use std::fmt;

#[derive(Debug)]
pub enum SamplerError {
    InvalidBounds { min: f64, max: f64 },
    InvalidStdv(f64),
    NonFinite { name: &'static str, value: f64 },
    Exhausted { attempts: usize },
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::InvalidBounds { min, max } => {
                write!(f, "invalid bounds: min ({}) must be <= max ({})", min, max)
            }
            SamplerError::InvalidStdv(stdv) => {
                write!(f, "invalid standard deviation: {} (must be >= 0)", stdv)
            }
            SamplerError::NonFinite { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
            SamplerError::Exhausted { attempts } => {
                write!(
                    f,
                    "no draw landed within bounds after {} attempts; \
                     the bounds are likely unreachable for this distribution",
                    attempts
                )
            }
        }
    }
}

impl std::error::Error for SamplerError {}
