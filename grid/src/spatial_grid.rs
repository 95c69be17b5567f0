//! Fixed-cell grid over moving actors.
//!
//! The grid keeps no motion tracking: owners `clear` and re-`insert` every
//! live actor once per tick, and the contents are only valid for that tick.
//! Handles are whatever the owner uses to find its actors again (typically an
//! index into its actor slice).

use crate::config::GridConfig;
use crate::error::{GridError, GridResult};
use common::shapes::Vector2;
use smallvec::SmallVec;

type Cell<T> = SmallVec<[T; 4]>;

pub struct SpatialGrid<T = usize> {
    cells: Vec<Cell<T>>,
    cell_size: f64,
    width: usize,
    height: usize,
    len: usize,
}

impl<T: Copy> SpatialGrid<T> {
    pub fn new(config: GridConfig) -> GridResult<Self> {
        if !(config.cell_size.is_finite() && config.cell_size > 0.0) {
            return Err(GridError::InvalidCellSize {
                cell_size: config.cell_size,
            });
        }
        let cell_count = config.width.saturating_mul(config.height);
        if cell_count == 0 {
            return Err(GridError::EmptyGrid {
                width: config.width,
                height: config.height,
            });
        }
        Ok(Self {
            cells: vec![SmallVec::new(); cell_count],
            cell_size: config.cell_size,
            width: config.width,
            height: config.height,
            len: 0,
        })
    }

    fn cell_coords_unclamped(&self, pos: Vector2) -> Option<(i64, i64)> {
        if !pos.is_finite() {
            return None;
        }
        Some((
            (pos.x / self.cell_size).floor() as i64,
            (pos.y / self.cell_size).floor() as i64,
        ))
    }

    fn in_bounds(&self, cx: i64, cy: i64) -> bool {
        cx >= 0 && cy >= 0 && (cx as u64) < self.width as u64 && (cy as u64) < self.height as u64
    }

    /// Column and row of the cell holding `pos`, if it lies on the grid.
    pub fn cell_coords(&self, pos: Vector2) -> Option<(usize, usize)> {
        let (cx, cy) = self.cell_coords_unclamped(pos)?;
        if self.in_bounds(cx, cy) {
            Some((cx as usize, cy as usize))
        } else {
            None
        }
    }

    /// Flat index `row * width + column`. Each axis is checked separately,
    /// so positions left of the grid never wrap into the previous row.
    pub fn cell_index(&self, pos: Vector2) -> Option<usize> {
        self.cell_coords(pos).map(|(cx, cy)| cy * self.width + cx)
    }

    /// Returns false and stores nothing when `pos` is off the grid.
    pub fn insert(&mut self, handle: T, pos: Vector2) -> bool {
        match self.cell_index(pos) {
            Some(index) => {
                self.cells[index].push(handle);
                self.len += 1;
                true
            }
            None => {
                log::trace!("grid insert outside tracked area at ({}, {})", pos.x, pos.y);
                false
            }
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.len = 0;
    }

    /// Clears the grid and inserts every `(handle, position)` pair.
    pub fn rebuild<I>(&mut self, actors: I)
    where
        I: IntoIterator<Item = (T, Vector2)>,
    {
        self.clear();
        for (handle, pos) in actors {
            self.insert(handle, pos);
        }
    }

    pub fn get_nearby(&self, pos: Vector2) -> Vec<T> {
        let mut nearby = Vec::new();
        self.nearby_into(pos, &mut nearby);
        nearby
    }

    /// Replaces the contents of `nearby` with every handle in the 3x3 block of
    /// cells around `pos`, clamped to the grid. This is a superset of the true
    /// neighbours; callers still check real distances.
    pub fn nearby_into(&self, pos: Vector2, nearby: &mut Vec<T>) {
        nearby.clear();
        let Some((cell_x, cell_y)) = self.cell_coords_unclamped(pos) else {
            return;
        };

        for y in cell_y.saturating_sub(1)..=cell_y.saturating_add(1) {
            for x in cell_x.saturating_sub(1)..=cell_x.saturating_add(1) {
                if self.in_bounds(x, y) {
                    let index = y as usize * self.width + x as usize;
                    nearby.extend_from_slice(&self.cells[index]);
                }
            }
        }
    }

    pub fn cell(&self, cx: usize, cy: usize) -> &[T] {
        if cx < self.width && cy < self.height {
            &self.cells[cy * self.width + cx]
        } else {
            &[]
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }
}
