#[derive(Debug, Clone)]
pub struct Config {
    pub node_capacity: usize,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 4,
            max_depth: 8,
        }
    }
}
