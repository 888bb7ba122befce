use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{GameState, Phase};
use crate::hand::HandResult;
use crate::player::Action;

/// Records a single player action during a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index (0 or 1)
    pub seat: usize,
    /// Phase the action was taken in
    pub phase: Phase,
    /// The action as submitted, before any all-in capping
    pub action: Action,
}

/// One seat's evaluated hand at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownHand {
    pub seat: usize,
    pub hand: HandResult,
}

/// Hands revealed at showdown and how the pot was paid out.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats holding the best hand; two on a split
    pub winners: Vec<usize>,
    /// Description of the winning hand, e.g. "Flush, Ace high"
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub hands: Vec<ShowdownHand>,
    /// Chips paid to each seat, indexed by seat
    #[serde(default)]
    pub payouts: Vec<u32>,
}

/// Complete record of a finished hand, written one per line as JSONL.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `<game_id>-<hand number, 6 digits>`
    pub hand_id: String,
    /// Shuffle seed; absent when the hand used a supplied deck
    pub seed: Option<u64>,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Human-readable outcome, e.g. "seat 0 wins (best hand)"
    pub result: Option<String>,
    /// RFC3339 timestamp, filled in by [`HandLogger::write`] when missing
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_hand_id(game_id: &str, hand_number: u64) -> String {
    format!("{}-{:06}", game_id, hand_number)
}

impl HandRecord {
    /// Builds the record of the hand `state` just finished.
    ///
    /// # Errors
    ///
    /// [`GameError::HandNotDealt`] before the first hand and
    /// [`GameError::HandInProgress`] while the hand is still running.
    pub fn from_state(state: &GameState) -> Result<Self, GameError> {
        match state.phase() {
            Phase::Complete => {}
            Phase::Waiting => return Err(GameError::HandNotDealt),
            _ => return Err(GameError::HandInProgress),
        }
        let result = match (state.winner(), state.win_reason()) {
            (Some(seat), Some(reason)) => Some(format!("seat {} wins ({})", seat, reason)),
            (None, Some(reason)) => Some(reason.to_string()),
            _ => None,
        };
        let players = state.players();
        let meta = serde_json::json!({
            "game_id": state.game_id(),
            "hand_number": state.hand_number(),
            "dealer": state.dealer_index(),
            "players": [players[0].id.as_str(), players[1].id.as_str()],
            "stacks": [players[0].stack(), players[1].stack()],
        });
        Ok(Self {
            hand_id: format_hand_id(state.game_id(), state.hand_number()),
            seed: state.hand_seed(),
            actions: state.actions().to_vec(),
            board: state.community().to_vec(),
            result,
            ts: None,
            meta: Some(meta),
            showdown: state.showdown().cloned(),
        })
    }
}

/// Appends [`HandRecord`]s to a JSONL file.
pub struct HandLogger {
    writer: BufWriter<File>,
}

impl HandLogger {
    /// Truncates or creates `path`, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::ensure_parent(path.as_ref())?;
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    /// Opens `path` for appending, keeping existing records.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::ensure_parent(path.as_ref())?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    fn ensure_parent(path: &Path) -> std::io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent),
            _ => Ok(()),
        }
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        tracing::debug!(hand_id = %rec.hand_id, "hand record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_id_is_zero_padded() {
        assert_eq!(format_hand_id("g7", 42), "g7-000042");
    }

    #[test]
    fn record_requires_a_finished_hand() {
        let gs = GameState::new("g", [("a", "A"), ("b", "B")], Default::default()).unwrap();
        assert_eq!(HandRecord::from_state(&gs), Err(GameError::HandNotDealt));
    }
}
