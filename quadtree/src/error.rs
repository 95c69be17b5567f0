use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRectangleDims { width: f64, height: f64 },
    DuplicateEntity { id: u32 },
    UnknownEntity { id: u32 },
    EntityOutOfBounds {
        id: u32,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
        bounds_min_x: f64,
        bounds_min_y: f64,
        bounds_max_x: f64,
        bounds_max_y: f64,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRectangleDims { width, height } => {
                write!(
                    f,
                    "rectangle position and width/height must be finite, width/height non-negative (width: {}, height: {})",
                    width, height
                )
            }
            QuadtreeError::DuplicateEntity { id } => {
                write!(f, "entity {} is already in the quadtree", id)
            }
            QuadtreeError::UnknownEntity { id } => {
                write!(f, "entity {} is not in the quadtree", id)
            }
            QuadtreeError::EntityOutOfBounds {
                id,
                min_x,
                min_y,
                max_x,
                max_y,
                bounds_min_x,
                bounds_min_y,
                bounds_max_x,
                bounds_max_y,
            } => {
                write!(
                    f,
                    "entity {} must lie within quadtree bounds (min_x: {}, min_y: {}, max_x: {}, max_y: {}, bounds_min_x: {}, bounds_min_y: {}, bounds_max_x: {}, bounds_max_y: {})",
                    id,
                    min_x,
                    min_y,
                    max_x,
                    max_y,
                    bounds_min_x,
                    bounds_min_y,
                    bounds_max_x,
                    bounds_max_y
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
