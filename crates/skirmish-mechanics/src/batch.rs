//! The batch driver: many silent matches, tallied.

use serde::Serialize;

use crate::dice::RandomSource;
use crate::encounter::Encounter;
use crate::error::{MechError, MechResult};
use crate::report::Silent;
use crate::simulation::{MatchOutcome, MatchState, run_match};

/// Trials run when the caller does not ask for a specific count.
pub const DEFAULT_TRIALS: u32 = 100;

/// Win/loss/tie counts from the players' point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Matches played.
    pub trials: u32,
    /// Players survived, monsters did not.
    pub wins: u32,
    /// Monsters survived, players did not.
    pub losses: u32,
    /// Nobody survived.
    pub ties: u32,
}

impl BatchStats {
    /// Count one finished match.
    pub fn record(&mut self, outcome: &MatchOutcome) -> MechResult<()> {
        match outcome.state() {
            MatchState::PlayersWin => self.wins += 1,
            MatchState::MonstersWin => self.losses += 1,
            MatchState::MutualWipe => self.ties += 1,
            MatchState::InProgress => {
                return Err(MechError::InvariantViolation(
                    "both sides survived a finished match".into(),
                ));
            }
        }
        self.trials += 1;
        Ok(())
    }

    /// Combine the tallies of two independent batches.
    pub fn merge(self, other: Self) -> Self {
        Self {
            trials: self.trials + other.trials,
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            ties: self.ties + other.ties,
        }
    }

    fn rate(&self, count: u32) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.trials)
        }
    }

    /// Fraction of matches the players won.
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// Fraction of matches the monsters won.
    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Fraction of matches that ended in a mutual wipe.
    pub fn tie_rate(&self) -> f64 {
        self.rate(self.ties)
    }
}

impl std::fmt::Display for BatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.wins, self.losses, self.ties)
    }
}

/// Run `trials` independent matches against freshly built encounters.
pub fn run_batch<R: RandomSource + ?Sized>(trials: u32, rng: &mut R) -> MechResult<BatchStats> {
    let mut stats = BatchStats::default();
    for _ in 0..trials {
        let mut encounter = Encounter::standard(rng)?;
        let outcome = run_match(&mut encounter, rng, &mut Silent)?;
        stats.record(&outcome)?;
    }
    tracing::info!(
        trials = stats.trials,
        wins = stats.wins,
        losses = stats.losses,
        ties = stats.ties,
        "batch finished"
    );
    Ok(stats)
}
