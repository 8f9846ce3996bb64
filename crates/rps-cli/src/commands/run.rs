use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use tracing::info;

use rps_core::TokenKind;
use rps_simulation::{ScanPolicy, SimConfig, SimEventKind, Simulation, Snapshot};

use crate::presentation::{paint, plural_label, share_bar, win_banner};

/// Flags of `rps run`, with the grace period already resolved to ticks.
pub struct RunOptions {
    pub width: i32,
    pub height: i32,
    pub spawn_count: u32,
    pub min_speed: i32,
    pub max_speed: i32,
    pub grace_ticks: u64,
    pub token_size: i32,
    pub seed: u64,
    pub max_ticks: u64,
    pub rounds: u32,
    pub skip_self: bool,
    pub verbose: bool,
    pub json: bool,
    pub output: Option<PathBuf>,
}

impl RunOptions {
    fn config(&self) -> SimConfig {
        let policy = if self.skip_self {
            ScanPolicy::SkipSelf
        } else {
            ScanPolicy::IncludeSelf
        };
        SimConfig::default()
            .with_arena(self.width, self.height)
            .with_spawn_count(self.spawn_count)
            .with_speed_range(self.min_speed, self.max_speed)
            .with_grace_ticks(self.grace_ticks)
            .with_token_size(self.token_size)
            .with_seed(self.seed)
            .with_scan_policy(policy)
            // Conversions per round are counted from the log, so keep it whole.
            .with_max_events(0)
    }
}

#[derive(Debug, Serialize)]
struct RoundSummary {
    round: u32,
    ticks: u64,
    winner: Option<TokenKind>,
    conversions: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a SimConfig,
    rounds: &'a [RoundSummary],
    last: &'a Snapshot,
}

pub fn run(opts: &RunOptions) -> Result<(), String> {
    if opts.rounds == 0 {
        return Err("--rounds must be at least 1".into());
    }

    let mut sim = Simulation::new(opts.config()).map_err(|e| e.to_string())?;

    let mut summaries = Vec::with_capacity(opts.rounds as usize);
    for round in 1..=opts.rounds {
        if round > 1 {
            sim.reset();
        }
        let winner = sim.run_until_converged(opts.max_ticks);
        info!(round, ticks = sim.current_tick(), ?winner, "round finished");
        summaries.push(RoundSummary {
            round,
            ticks: sim.current_tick(),
            winner,
            conversions: sim.events().conversions(),
        });
    }

    let last = sim.snapshot();
    let report = Report {
        config: sim.config(),
        rounds: &summaries,
        last: &last,
    };

    if let Some(path) = &opts.output {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize run: {e}"))?;
        fs::write(path, json).map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    }

    if opts.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize run: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    print_report(&sim, &summaries, &last, opts);

    if let Some(path) = &opts.output {
        println!("  Wrote run to {}", path.display());
    }

    Ok(())
}

fn print_report(sim: &Simulation, summaries: &[RoundSummary], last: &Snapshot, opts: &RunOptions) {
    let config = sim.config();
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({} tokens, {}x{} arena, seed={}, grace={} ticks)",
            last.population_size(),
            config.width,
            config.height,
            config.seed,
            config.grace_ticks
        )
        .dimmed()
    );
    println!();

    if opts.verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let tick_label = format!("[tick {:>5}]", event.tick).dimmed();
            println!("  {tick_label} {}", colorize_event(&event.kind, &event.description));
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    }

    println!("  {}", "Scores".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Score", "Share"]);
    let total = last.scores.total();
    for (kind, count) in last.scores.iter() {
        let label = format!("{}: {count}", plural_label(kind));
        table.add_row(vec![label, share_bar(count, total)]);
    }
    println!("{table}");
    println!();

    for summary in summaries {
        let outcome = match summary.winner {
            Some(kind) => paint(kind, &win_banner(kind)).bold().to_string(),
            None => "no winner".dimmed().to_string(),
        };
        println!(
            "  Round {}: {outcome} {}",
            summary.round,
            format!(
                "({} ticks, {} conversions)",
                summary.ticks, summary.conversions
            )
            .dimmed()
        );
    }

    if summaries.len() > 1 {
        println!();
        print_tally(summaries);
    }

    if !last.is_finished() {
        println!();
        let survivors = last.scores.surviving();
        let names: Vec<&str> = survivors.iter().map(|k| k.name()).collect();
        let leader = last.leader().map_or("nobody", |k| k.name());
        println!(
            "  {} after {} ticks, {} kinds left ({}), {leader} leads",
            "No winner".yellow().bold(),
            last.tick,
            survivors.len(),
            names.join(", ")
        );
    }
    println!();
}

fn print_tally(summaries: &[RoundSummary]) {
    println!("  {}", "Win Tally".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Wins"]);
    for kind in TokenKind::ALL {
        let wins = summaries.iter().filter(|s| s.winner == Some(kind)).count();
        table.add_row(vec![kind.name().to_string(), wins.to_string()]);
    }
    let draws = summaries.iter().filter(|s| s.winner.is_none()).count();
    if draws > 0 {
        table.add_row(vec!["(no winner)".to_string(), draws.to_string()]);
    }
    println!("{table}");
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::WarmupEnded => description.dimmed(),
        SimEventKind::Converted { to, .. } => paint(*to, description),
        SimEventKind::WinnerDeclared { kind } => paint(*kind, description).bold(),
        SimEventKind::Reset => description.magenta(),
    }
}
