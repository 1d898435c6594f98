//! Shared tactical state types.
//!
//! The whole application state is one aggregate (`AppState`): dashboard metrics,
//! the mission board, and the conversation transcript. It is owned by the
//! `CommandCenter` and persisted as a single unit after every transition.
//! Field names serialize in camelCase so blobs written by earlier builds of the
//! app load unchanged.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tactical metrics: the three dashboard panels
// ---------------------------------------------------------------------------

/// Energy Reserve panel. Each field is semantically 0–100, but the extractor
/// writes whatever the operator reported; only the presentation layer caps bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyReserve {
    pub sleep: u32,
    pub diet: u32,
    pub exercise: u32,
}

/// Territory Expansion panel. Write-once at seed time; no runtime mutation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    pub productive_hours: f64,
    pub project_count: u32,
}

/// Fortress Stability panel: interception counter plus a human-readable local
/// wall-clock string (not ISO) for the last deflected breach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fortress {
    pub interceptions: u32,
    pub last_intercept_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticalMetrics {
    pub energy: EnergyReserve,
    pub territory: Territory,
    pub fortress: Fortress,
}

impl TacticalMetrics {
    /// Average of the three energy sub-fields, as shown on the dashboard footer.
    /// Widened before summing: the extractor writes unclamped values, so the
    /// sub-fields may individually approach `u32::MAX`.
    pub fn system_integrity(&self) -> u32 {
        let sum =
            self.energy.sleep as u64 + self.energy.diet as u64 + self.energy.exercise as u64;
        (sum / 3) as u32
    }
}

// ---------------------------------------------------------------------------
// Mission board
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MissionType {
    Main,
    Side,
}

impl MissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionType::Main => "MAIN",
            MissionType::Side => "SIDE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MissionStatus {
    Active,
    Completed,
    Abandoned,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Active => "ACTIVE",
            MissionStatus::Completed => "COMPLETED",
            MissionStatus::Abandoned => "ABANDONED",
        }
    }

    /// Board ordering: active work first, abandoned last.
    fn sort_rank(&self) -> u8 {
        match self {
            MissionStatus::Active => 0,
            MissionStatus::Completed => 1,
            MissionStatus::Abandoned => 2,
        }
    }
}

/// One mission row. Seeded at init; the board is read-only at runtime
/// (no creation or completion flow exists yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MissionType,
    pub progress: u32,
    pub status: MissionStatus,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissionSortKey {
    /// ACTIVE before COMPLETED before ABANDONED; ties keep insertion order.
    #[default]
    Status,
    /// MAIN missions first.
    Type,
    /// Highest progress first.
    Progress,
}

impl MissionSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionSortKey::Status => "status",
            MissionSortKey::Type => "type",
            MissionSortKey::Progress => "progress",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("status") => Some(MissionSortKey::Status),
            s if s.eq_ignore_ascii_case("type") => Some(MissionSortKey::Type),
            s if s.eq_ignore_ascii_case("progress") => Some(MissionSortKey::Progress),
            _ => None,
        }
    }
}

/// Returns the board sorted by the given key. Stable: equal rows keep their
/// original (insertion) order.
pub fn sort_missions(missions: &[Mission], key: MissionSortKey) -> Vec<Mission> {
    let mut sorted = missions.to_vec();
    match key {
        MissionSortKey::Status => sorted.sort_by_key(|m| m.status.sort_rank()),
        MissionSortKey::Type => sorted.sort_by_key(|m| m.kind != MissionType::Main),
        MissionSortKey::Progress => sorted.sort_by_key(|m| std::cmp::Reverse(m.progress)),
    }
    sorted
}

// ---------------------------------------------------------------------------
// Conversation transcript
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Role tag in the oracle's wire shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One transcript entry. The history is append-only within a session: never
/// reordered, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Markdown body, rendered as-is by the terminal.
    pub content: String,
    pub timestamp: String,
}

impl Message {
    /// New message stamped with the current UTC time (ISO-8601).
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregate root
// ---------------------------------------------------------------------------

/// The full application state, replaced and persisted as one unit on every
/// mutation. No partial writes, no transactional semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub metrics: TacticalMetrics,
    pub missions: Vec<Mission>,
    pub history: Vec<Message>,
}

impl AppState {
    /// Hardcoded seed: used on first launch and whenever the persisted blob is
    /// missing or unreadable.
    pub fn seed() -> Self {
        let stamp = Utc::now().to_rfc3339();
        Self {
            metrics: TacticalMetrics {
                energy: EnergyReserve {
                    sleep: 80,
                    diet: 70,
                    exercise: 50,
                },
                territory: Territory {
                    productive_hours: 2.0,
                    project_count: 3,
                },
                fortress: Fortress {
                    interceptions: 0,
                    last_intercept_time: "N/A".to_string(),
                },
            },
            missions: vec![
                Mission {
                    id: "1".to_string(),
                    title: "PERSONAL UNIVERSE ENGINE RECONSTRUCTION".to_string(),
                    kind: MissionType::Main,
                    progress: 35,
                    status: MissionStatus::Active,
                    timestamp: stamp.clone(),
                },
                Mission {
                    id: "2".to_string(),
                    title: "DEBT OF ATTENTION REPAYMENT".to_string(),
                    kind: MissionType::Side,
                    progress: 80,
                    status: MissionStatus::Active,
                    timestamp: stamp.clone(),
                },
                Mission {
                    id: "3".to_string(),
                    title: "INDUSTRIAL DESIGN PROTOCOL ALPHA".to_string(),
                    kind: MissionType::Main,
                    progress: 100,
                    status: MissionStatus::Completed,
                    timestamp: stamp.clone(),
                },
            ],
            history: vec![Message {
                role: Role::Model,
                content: crate::persona::INITIAL_BRIEFING.to_string(),
                timestamp: stamp,
            }],
        }
    }
}
