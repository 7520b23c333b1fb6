/// Exposure state of the portfolio on one bar.
///
/// Serialized as `1` (fully exposed) and `0` (hedged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PositionState {
    /// Fully exposed to the asset (no hedge active).
    #[default]
    Exposed,
    /// Hedge active.
    Hedged,
}

impl PositionState {
    /// Numeric position value used by the equity compositor.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            PositionState::Exposed => 1.0,
            PositionState::Hedged => 0.0,
        }
    }
}

impl From<PositionState> for u8 {
    fn from(state: PositionState) -> Self {
        match state {
            PositionState::Exposed => 1,
            PositionState::Hedged => 0,
        }
    }
}

impl TryFrom<u8> for PositionState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PositionState::Exposed),
            0 => Ok(PositionState::Hedged),
            other => Err(format!("invalid position {other}, expected 0 or 1")),
        }
    }
}
