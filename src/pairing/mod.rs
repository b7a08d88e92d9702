use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::database::models::{Pairing, Standing};
use crate::errors::{StoreError, StoreResult};

/// What to do with the last player when the standings have odd length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OddPlayerPolicy {
    #[default]
    Reject,
    /// Leave the lowest-ranked player without an opponent this round
    DropLast,
}

impl FromStr for OddPlayerPolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "drop-last" | "drop_last" => Ok(Self::DropLast),
            other => anyhow::bail!("Unknown odd player policy: {}", other),
        }
    }
}

impl fmt::Display for OddPlayerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::DropLast => write!(f, "drop-last"),
        }
    }
}

/// Pair neighbours of score-sorted standings, each player used once.
pub fn pair_adjacent(standings: &[Standing], policy: OddPlayerPolicy) -> StoreResult<Vec<Pairing>> {
    let pairs = standings.chunks_exact(2);

    if let [unpaired] = pairs.remainder() {
        match policy {
            OddPlayerPolicy::Reject => {
                return Err(StoreError::OddPlayerCount(standings.len()));
            }
            OddPlayerPolicy::DropLast => {
                warn!(
                    "Odd player count ({}), {} (id {}) sits out this round",
                    standings.len(),
                    unpaired.name,
                    unpaired.player_id
                );
            }
        }
    }

    Ok(pairs.map(|pair| Pairing::between(&pair[0], &pair[1])).collect())
}
