use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use rps_core::TokenKind;
use rps_core::dominance::RULES;

use crate::presentation::paint;

pub fn run() -> Result<(), String> {
    println!("  {}", "Dominance".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Beats", "Loses to"]);

    for kind in TokenKind::ALL {
        let join = |kinds: [TokenKind; 2]| {
            kinds
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            kind.name().to_string(),
            join(kind.prey()),
            join(kind.predators()),
        ]);
    }

    println!("{table}");
    println!();

    for rule in &RULES {
        let line = format!("{} {} {}", rule.winner, rule.verb, rule.loser);
        println!("  {}", paint(rule.winner, &line));
    }
    println!();

    Ok(())
}
