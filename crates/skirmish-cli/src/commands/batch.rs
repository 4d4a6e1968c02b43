use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use skirmish_mechanics::{SimConfig, run_batch};

pub fn run(config: &SimConfig, json: bool) -> Result<(), String> {
    let mut rng = config.rng();
    let stats = run_batch(config.trials, &mut rng).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    // wins losses ties
    println!("{stats}");
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Count", "Rate"]);
    for (label, count, rate) in [
        ("Players win", stats.wins, stats.win_rate()),
        ("Monsters win", stats.losses, stats.loss_rate()),
        ("Mutual wipe", stats.ties, stats.tie_rate()),
    ] {
        table.add_row(vec![
            label.to_string(),
            count.to_string(),
            format!("{:.1}%", rate * 100.0),
        ]);
    }
    println!("{table}");

    let seed = config
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "random".to_string());
    println!(
        "  {}",
        format!("({} trials, seed={seed})", stats.trials).dimmed()
    );
    Ok(())
}
