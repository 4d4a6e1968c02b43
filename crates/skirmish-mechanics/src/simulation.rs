//! The match driver: rounds until one side has no one standing.

use crate::combat::run_round;
use crate::dice::RandomSource;
use crate::encounter::Encounter;
use crate::error::{MechError, MechResult};
use crate::report::{CombatEvent, ReportSink};

/// Where a match stands, judged between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Both sides still have an active member.
    InProgress,
    /// Only the players have anyone standing.
    PlayersWin,
    /// Only the monsters have anyone standing.
    MonstersWin,
    /// Nobody on either side is standing.
    MutualWipe,
}

impl MatchState {
    /// Derive the state from which sides still have an active member.
    pub fn from_survivors(players_alive: bool, monsters_alive: bool) -> Self {
        match (players_alive, monsters_alive) {
            (true, true) => Self::InProgress,
            (true, false) => Self::PlayersWin,
            (false, true) => Self::MonstersWin,
            (false, false) => Self::MutualWipe,
        }
    }

    /// Returns true once the match can no longer continue.
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::PlayersWin => write!(f, "players win"),
            Self::MonstersWin => write!(f, "monsters win"),
            Self::MutualWipe => write!(f, "mutual wipe"),
        }
    }
}

/// The result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// At least one player is still active.
    pub players_alive: bool,
    /// At least one monster is still active.
    pub monsters_alive: bool,
    /// Rounds fought.
    pub rounds: u32,
}

impl MatchOutcome {
    /// The terminal state this outcome represents.
    pub fn state(&self) -> MatchState {
        MatchState::from_survivors(self.players_alive, self.monsters_alive)
    }
}

/// Fight rounds until at least one side is wiped out.
///
/// The end condition is only checked between rounds: a round always runs
/// every tier even if one side falls partway through.
pub fn run_match<R, S>(encounter: &mut Encounter, rng: &mut R, sink: &mut S) -> MechResult<MatchOutcome>
where
    R: RandomSource + ?Sized,
    S: ReportSink + ?Sized,
{
    let mut rounds = 0;
    loop {
        let (players_alive, monsters_alive) = encounter.survivors();
        if MatchState::from_survivors(players_alive, monsters_alive).is_terminal() {
            break;
        }
        rounds += 1;
        run_round(encounter, rounds, rng, sink)?;
        tracing::debug!(round = rounds, "round resolved");
    }

    let (players_alive, monsters_alive) = encounter.survivors();
    let outcome = MatchOutcome {
        players_alive,
        monsters_alive,
        rounds,
    };
    if outcome.state() == MatchState::InProgress {
        return Err(MechError::InvariantViolation(
            "match ended with both sides still standing".into(),
        ));
    }

    if sink.enabled() {
        sink.record(CombatEvent::MatchEnded {
            players_alive,
            monsters_alive,
            rounds,
        });
    }
    tracing::debug!(rounds, state = %outcome.state(), "match finished");
    Ok(outcome)
}
