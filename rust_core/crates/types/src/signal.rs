/// Per-bar hedge instruction produced by a signal rule.
///
/// Serialized as the integers `-1` (hedge) and `0` (none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum HedgeSignal {
    /// Neutralize the hedged fraction of the position.
    Hedge,
    /// No instruction.
    #[default]
    None,
}

impl HedgeSignal {
    /// Returns the integer encoding (`-1` or `0`).
    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            HedgeSignal::Hedge => -1,
            HedgeSignal::None => 0,
        }
    }

    /// Returns true for a hedge instruction.
    #[must_use]
    pub fn is_hedge(self) -> bool {
        self == HedgeSignal::Hedge
    }
}

impl From<HedgeSignal> for i8 {
    fn from(signal: HedgeSignal) -> Self {
        signal.as_i8()
    }
}

impl TryFrom<i8> for HedgeSignal {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(HedgeSignal::Hedge),
            0 => Ok(HedgeSignal::None),
            other => Err(format!("invalid hedge signal {other}, expected -1 or 0")),
        }
    }
}
