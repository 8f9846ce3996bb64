use colored::{ColoredString, Colorize};
use rps_core::TokenKind;

/// Scoreboard label, e.g. `ROCKS`.
pub fn plural_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Rock => "ROCKS",
        TokenKind::Paper => "PAPERS",
        TokenKind::Scissors => "SCISSORS",
        TokenKind::Lizard => "LIZARDS",
        TokenKind::Spock => "SPOCKS",
    }
}

/// Paint `text` in the colour used for `kind`.
pub fn paint(kind: TokenKind, text: &str) -> ColoredString {
    match kind {
        TokenKind::Rock => text.yellow(),
        TokenKind::Paper => text.white(),
        TokenKind::Scissors => text.cyan(),
        TokenKind::Lizard => text.green(),
        TokenKind::Spock => text.blue(),
    }
}

/// Banner shown once a kind has taken over, e.g. `ROCK WINS !!!`.
pub fn win_banner(kind: TokenKind) -> String {
    format!("{} WINS !!!", kind.name().to_uppercase())
}

/// Fixed-width bar proportional to `count / total`.
pub fn share_bar(count: u32, total: usize) -> String {
    const WIDTH: usize = 20;
    let filled = if total == 0 {
        0
    } else {
        (count as usize * WIDTH).div_ceil(total).min(WIDTH)
    };
    format!("{}{}", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_plural_and_upper_case() {
        assert_eq!(plural_label(TokenKind::Rock), "ROCKS");
        assert_eq!(plural_label(TokenKind::Scissors), "SCISSORS");
        assert_eq!(plural_label(TokenKind::Spock), "SPOCKS");
    }

    #[test]
    fn win_banner_matches_game_message() {
        assert_eq!(win_banner(TokenKind::Lizard), "LIZARD WINS !!!");
    }

    #[test]
    fn share_bar_bounds() {
        assert_eq!(share_bar(0, 0), "-".repeat(20));
        assert_eq!(share_bar(5, 5), "#".repeat(20));
        assert_eq!(share_bar(1, 4).matches('#').count(), 5);
    }
}
