//! lighthouse-core: Abyss Lighthouse core library.
//!
//! Tactical state model, single-slot Sled persistence, the metrics heuristic
//! extractor, the Gemini oracle client, and the conversation controller that
//! orchestrates them. The terminal add-on renders this state and forwards
//! operator intents; all mutation lives here.

mod config;
mod controller;
mod extractor;
mod oracle;
mod persona;
mod shared;
mod state_store;

pub use config::LighthouseConfig;
pub use controller::{CommandCenter, Phase, SubmitOutcome};
pub use extractor::{HeuristicExtractor, MetricsExtractor};
pub use oracle::{GeminiOracle, Oracle, OracleError};
pub use persona::{EMPTY_REPLY_FALLBACK, INITIAL_BRIEFING, ORACLE_FAILURE_NOTICE, SYSTEM_INSTRUCTION};
pub use shared::{
    sort_missions, AppState, EnergyReserve, Fortress, Message, Mission, MissionSortKey,
    MissionStatus, MissionType, Role, TacticalMetrics, Territory,
};
pub use state_store::{StateStore, StoreError};
