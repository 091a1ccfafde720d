use core::fmt;

/// Reasons a `FlockSettings` value is refused
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A weight is negative, infinite or NaN.
    InvalidWeight { name: &'static str, value: f64 },
    /// A bound is zero, negative, infinite or NaN.
    InvalidBounds { x: f64, y: f64 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidWeight { name, value } => {
                write!(f, "{} weight must be a finite value >= 0, got {}", name, value)
            }
            SettingsError::InvalidBounds { x, y } => {
                write!(f, "bounds must be finite and positive, got {} x {}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SettingsError::InvalidWeight {
            name: "alignment",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "alignment weight must be a finite value >= 0, got -1"
        );

        let err = SettingsError::InvalidBounds { x: 0.0, y: 10.0 };
        assert_eq!(err.to_string(), "bounds must be finite and positive, got 0 x 10");
    }
}
