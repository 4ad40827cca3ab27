#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Multiplication with a value that is neither a quaternion nor a real scalar.
    UnsupportedOperand(&'static str),
    /// The quaternion has (near) zero magnitude and cannot be normalized or inverted.
    DegenerateMagnitude,
    /// The magnitude is infinite or NaN because a component is.
    NonFiniteMagnitude,
    /// The scalar part lies outside `[-1, 1]`, so `acos` is undefined.
    DomainError(f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperand(t) => write!(f, "Multiplication with type {} not supported", t),
            Self::DegenerateMagnitude => write!(f, "DegenerateMagnitude"),
            Self::NonFiniteMagnitude => write!(f, "NonFiniteMagnitude"),
            Self::DomainError(w) => write!(f, "DomainError(w = {} is outside [-1, 1])", w),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use crate::result::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::UnsupportedOperand("&str").to_string(),
            "Multiplication with type &str not supported"
        );
        assert_eq!(Error::DegenerateMagnitude.to_string(), "DegenerateMagnitude");
        assert_eq!(Error::NonFiniteMagnitude.to_string(), "NonFiniteMagnitude");
        assert_eq!(
            Error::DomainError(1.5).to_string(),
            "DomainError(w = 1.5 is outside [-1, 1])"
        );
    }
}
