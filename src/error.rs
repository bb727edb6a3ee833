use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A slice handed to `Vector2::try_from` did not hold exactly two components.
    SliceLength(usize),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::SliceLength(len) => {
                write!(f, "expected 2 vector components, got {}", len)
            }
        }
    }
}

impl std::error::Error for VectorError {}
