use crate::math::{Real, DEFAULT_EPSILON, VERTICAL_SLOPE_THRESHOLD};

/// Configuration for controlling the behavior of the separating-axis tests.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SatOptions {
    /// Edges with a slope magnitude above this value are considered vertical.
    ///
    /// This keeps `-1 / slope` away from the huge values nearly vertical edges would
    /// otherwise produce when computing their normal.
    pub vertical_slope_threshold: Real,
    /// If `true`, edges shorter than [`Self::degenerate_edge_epsilon`] don't provide any
    /// candidate axis. If `false` they are tested like any other edge, as if they were
    /// vertical.
    pub skip_degenerate_edges: bool,
    /// The length under which an edge is considered degenerate.
    pub degenerate_edge_epsilon: Real,
}

impl SatOptions {
    /// Creates a [`SatOptions`] with the default values except for the vertical slope threshold.
    pub fn with_vertical_slope_threshold(vertical_slope_threshold: Real) -> Self {
        Self {
            vertical_slope_threshold,
            ..Default::default()
        }
    }
}

impl Default for SatOptions {
    fn default() -> Self {
        Self {
            vertical_slope_threshold: VERTICAL_SLOPE_THRESHOLD,
            skip_degenerate_edges: true,
            degenerate_edge_epsilon: DEFAULT_EPSILON,
        }
    }
}
