//! Tunable generation parameters.

/// Retry budget for a single tent or tree placement before the whole
/// generation attempt is abandoned.
pub const MAX_TRIES: u32 = 10;

/// Consecutive failed generation attempts tolerated before generation gives
/// up for good. Transient failures are common at high densities; running
/// out of restarts means the configuration itself is hopeless.
pub const MAX_RESTARTS: u32 = 1000;

/// Default slope of the tent density formula `slope * dim + offset`.
pub const DENSITY_SLOPE: f64 = 3.16;

/// Default offset of the tent density formula.
pub const DENSITY_OFFSET: f64 = -10.83;

/// Generation parameters. The density formula is an empirical default tuned
/// to keep puzzles solvable at typical sizes; override `tent_count` to pin
/// an exact target instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Explicit number of tents to place, bypassing the density formula.
    pub tent_count: Option<usize>,
    pub density_slope: f64,
    pub density_offset: f64,
    pub max_tries: u32,
    pub max_restarts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            tent_count: None,
            density_slope: DENSITY_SLOPE,
            density_offset: DENSITY_OFFSET,
            max_tries: MAX_TRIES,
            max_restarts: MAX_RESTARTS,
        }
    }
}

impl GeneratorConfig {
    /// Number of tents to place on a `dim`-sized board: the explicit
    /// override when set, otherwise the density formula rounded and clamped
    /// to zero.
    pub fn tent_target(&self, dim: usize) -> usize {
        if let Some(n) = self.tent_count {
            return n;
        }
        let raw = self.density_slope * dim as f64 + self.density_offset;
        raw.round().max(0.0) as usize
    }
}
