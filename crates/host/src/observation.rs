//! Observation module - JSON view of a render snapshot
//!
//! One observation is emitted per visible change. Renderers read the `cells`
//! list and draw one unit block per entry; everything else is status.
//!
//! ```text
//! {"type":"observation","seq":3,"state":"running","score":0,"cells":[[1,5,2]],"last_event":{"kind":"descended"}}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{RenderSnapshot, TickEvent};
use crate::error::HostError;
use crate::types::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleLower {
    #[serde(rename = "not_started")]
    NotStarted,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "game_over")]
    GameOver,
}

impl From<Lifecycle> for LifecycleLower {
    fn from(value: Lifecycle) -> Self {
        match value {
            Lifecycle::NotStarted => LifecycleLower::NotStarted,
            Lifecycle::Running => LifecycleLower::Running,
            Lifecycle::GameOver => LifecycleLower::GameOver,
        }
    }
}

/// Outcome of the tick that produced an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LastEvent {
    Descended,
    Locked { cleared: u32 },
    GameOver { cleared: u32, final_score: u32 },
}

impl From<TickEvent> for LastEvent {
    fn from(value: TickEvent) -> Self {
        match value {
            TickEvent::Descended => LastEvent::Descended,
            TickEvent::Locked { cleared } => LastEvent::Locked { cleared },
            TickEvent::GameOver {
                cleared,
                final_score,
            } => LastEvent::GameOver {
                cleared,
                final_score,
            },
        }
    }
}

/// Snapshot of the play volume for an external renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub state: LifecycleLower,
    pub score: u32,
    /// Occupied cells as [x, y, z], in volume order
    pub cells: Vec<[u8; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_event: Option<LastEvent>,
}

impl Observation {
    pub fn from_snapshot(
        seq: u64,
        snapshot: &RenderSnapshot,
        last_event: Option<TickEvent>,
    ) -> Self {
        let cells = snapshot
            .volume
            .occupied()
            .map(|(x, y, z)| [x as u8, y as u8, z as u8])
            .collect();

        Self {
            msg_type: ObservationType::Observation,
            seq,
            state: snapshot.lifecycle.into(),
            score: snapshot.score,
            cells,
            last_event: last_event.map(LastEvent::from),
        }
    }

    /// Encode as a single JSON line (no trailing newline)
    pub fn to_json_line(&self) -> Result<String, HostError> {
        Ok(serde_json::to_string(self)?)
    }
}
