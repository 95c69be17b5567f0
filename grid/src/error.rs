use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    InvalidCellSize { cell_size: f64 },
    EmptyGrid { width: usize, height: usize },
}

pub type GridResult<T> = Result<T, GridError>;

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidCellSize { cell_size } => {
                write!(
                    f,
                    "cell size must be finite and positive (cell_size: {})",
                    cell_size
                )
            }
            GridError::EmptyGrid { width, height } => {
                write!(
                    f,
                    "grid must have at least one cell (width: {}, height: {})",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
