use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    ZeroDirection,
    CapacityExceeded { capacity: usize },
}

pub type PoolResult<T> = Result<T, PoolError>;

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::ZeroDirection => {
                write!(f, "emit direction must have a finite, non-zero length")
            }
            PoolError::CapacityExceeded { capacity } => {
                write!(f, "pool is full (capacity: {})", capacity)
            }
        }
    }
}

impl std::error::Error for PoolError {}
