//! Combat mechanics for the ogre skirmish simulator.
//!
//! Provides dice rolling, a fixed weapon catalog, combatants and rosters,
//! the initiative-tiered turn engine, and drivers that run a single
//! narrated match or tally outcomes over many silent trials.

pub mod batch;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod dice;
pub mod encounter;
pub mod error;
pub mod report;
pub mod simulation;
pub mod weapon;

pub use batch::{BatchStats, DEFAULT_TRIALS, run_batch};
pub use combat::{AttackOutcome, PendingDamage, run_round};
pub use combatant::{Combatant, Roster, Side, StatBlock};
pub use config::SimConfig;
pub use dice::{DiceExpr, Die, RandomSource, RollResult, ScriptedSource};
pub use encounter::{CombatantRef, Encounter};
pub use error::{MechError, MechResult};
pub use report::{CombatEvent, EventLog, ReportSink, Silent};
pub use simulation::{MatchOutcome, MatchState, run_match};
pub use weapon::Weapon;
