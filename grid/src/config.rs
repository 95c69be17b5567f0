#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Number of cell columns.
    pub width: usize,
    /// Number of cell rows.
    pub height: usize,
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: 16,
            height: 10,
            cell_size: 64.0,
        }
    }
}
