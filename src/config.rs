/// Tunable run parameters — exposed as CLI arguments and server request fields.
#[derive(Clone, Debug)]
pub struct Params {
    pub grid_size: usize,
    pub trials: usize,
    /// Pixels per site in snapshot renders.
    pub snapshot_cell: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            snapshot_cell: 4,
        }
    }
}
