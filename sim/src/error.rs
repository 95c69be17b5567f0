use grid::GridError;
use quadtree::QuadtreeError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    Walls(QuadtreeError),
    Grid(GridError),
}

pub type SimResult<T> = Result<T, SimError>;

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Walls(err) => write!(f, "wall index: {}", err),
            SimError::Grid(err) => write!(f, "enemy grid: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Walls(err) => Some(err),
            SimError::Grid(err) => Some(err),
        }
    }
}

impl From<QuadtreeError> for SimError {
    fn from(err: QuadtreeError) -> Self {
        SimError::Walls(err)
    }
}

impl From<GridError> for SimError {
    fn from(err: GridError) -> Self {
        SimError::Grid(err)
    }
}
