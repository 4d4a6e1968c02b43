use colored::Colorize;

use skirmish_mechanics::{
    AttackOutcome, CombatEvent, Encounter, MatchState, ReportSink, SimConfig, run_match,
};

/// Prints each event the moment it happens.
struct Console {
    json: bool,
}

impl ReportSink for Console {
    fn record(&mut self, event: CombatEvent) {
        if self.json {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!("could not serialize event: {e}"),
            }
            return;
        }
        let text = event.to_string();
        let line = match &event {
            CombatEvent::RoundStarted { .. } => text.bold(),
            CombatEvent::InitiativeOrder { .. } => text.dimmed(),
            CombatEvent::Attack {
                outcome: AttackOutcome::Critical,
                ..
            } => text.yellow().bold(),
            CombatEvent::Attack {
                outcome: AttackOutcome::Miss,
                ..
            } => text.normal(),
            CombatEvent::Attack { .. } => text.green(),
            CombatEvent::Died { .. } => text.red().bold(),
            CombatEvent::DownForTheCount { .. } | CombatEvent::TwiddlesThumbs { .. } => {
                text.dimmed()
            }
            CombatEvent::DamageTaken { .. } => text.normal(),
            CombatEvent::MatchEnded { .. } => text.bold(),
        };
        println!("{line}");
    }
}

pub fn run(config: &SimConfig, json: bool) -> Result<(), String> {
    let mut rng = config.rng();
    let mut encounter = Encounter::standard(&mut rng).map_err(|e| e.to_string())?;
    let mut console = Console { json };

    let outcome = run_match(&mut encounter, &mut rng, &mut console).map_err(|e| e.to_string())?;

    if !json {
        let verdict = match outcome.state() {
            MatchState::PlayersWin => "The party survives.".green().bold(),
            MatchState::MonstersWin => "The ogres survive.".red().bold(),
            MatchState::MutualWipe => "Nobody walks away.".yellow().bold(),
            MatchState::InProgress => {
                return Err("match ended with both sides standing".into());
            }
        };
        println!("{verdict}");
    }
    Ok(())
}
