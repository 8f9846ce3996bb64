use rps_core::{Token, TokenKind, Vec2};

use crate::ledger::ScoreLedger;

/// The live tokens plus their score ledger.
///
/// Kinds can only change through [`Population::convert`], which updates the
/// token and the ledger together. Motion gets at positions and velocities
/// through [`Population::kinematics_mut`] and never sees the kind.
#[derive(Debug, Clone, Default)]
pub struct Population {
    tokens: Vec<Token>,
    ledger: ScoreLedger,
}

impl Population {
    /// Seed a population. The ledger is tallied from the tokens' kinds.
    pub fn new(tokens: Vec<Token>) -> Self {
        let ledger = ScoreLedger::tally(tokens.iter().map(|t| t.kind));
        let population = Self { tokens, ledger };
        population.debug_check();
        population
    }

    /// Number of tokens. Constant for the life of the population.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in population order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The score ledger.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Mutable `(position, velocity)` pairs in population order.
    pub fn kinematics_mut(&mut self) -> impl Iterator<Item = (&mut Vec2, &mut Vec2)> + '_ {
        self.tokens
            .iter_mut()
            .map(|t| (&mut t.position, &mut t.velocity))
    }

    /// Retype the token at `index` to `to`, moving one point in the ledger.
    ///
    /// Returns the previous kind, or `None` if the token already was `to`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn convert(&mut self, index: usize, to: TokenKind) -> Option<TokenKind> {
        let token = &mut self.tokens[index];
        let from = token.kind;
        if from == to {
            return None;
        }
        token.kind = to;
        self.ledger.record_conversion(from, to);
        self.debug_check();
        Some(from)
    }

    /// The shared kind if every token has the same kind. `None` when empty.
    pub fn homogeneous_kind(&self) -> Option<TokenKind> {
        let first = self.tokens.first()?.kind;
        self.tokens
            .iter()
            .all(|t| t.kind == first)
            .then_some(first)
    }

    fn debug_check(&self) {
        debug_assert_eq!(
            self.ledger.total(),
            self.tokens.len(),
            "score ledger drifted from population size"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop(kinds: &[TokenKind]) -> Population {
        Population::new(
            kinds
                .iter()
                .enumerate()
                .map(|(i, &k)| Token::at_rest(k, Vec2::new(i as i32 * 100, 0)))
                .collect(),
        )
    }

    #[test]
    fn new_tallies_ledger() {
        let p = pop(&[TokenKind::Rock, TokenKind::Paper, TokenKind::Rock]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.ledger().count(TokenKind::Rock), 2);
        assert_eq!(p.ledger().count(TokenKind::Paper), 1);
    }

    #[test]
    fn convert_updates_token_and_ledger() {
        let mut p = pop(&[TokenKind::Rock, TokenKind::Scissors]);
        assert_eq!(p.convert(1, TokenKind::Rock), Some(TokenKind::Scissors));
        assert_eq!(p.tokens()[1].kind, TokenKind::Rock);
        assert_eq!(p.ledger().count(TokenKind::Rock), 2);
        assert_eq!(p.ledger().count(TokenKind::Scissors), 0);
    }

    #[test]
    fn convert_to_same_kind_is_noop() {
        let mut p = pop(&[TokenKind::Spock]);
        assert_eq!(p.convert(0, TokenKind::Spock), None);
        assert_eq!(p.ledger().count(TokenKind::Spock), 1);
    }

    #[test]
    fn homogeneous_kind_detects_convergence() {
        assert_eq!(
            pop(&[TokenKind::Lizard, TokenKind::Lizard]).homogeneous_kind(),
            Some(TokenKind::Lizard)
        );
        assert_eq!(
            pop(&[TokenKind::Lizard, TokenKind::Spock]).homogeneous_kind(),
            None
        );
        assert_eq!(pop(&[]).homogeneous_kind(), None);
    }

    #[test]
    fn kinematics_mut_moves_tokens() {
        let mut p = pop(&[TokenKind::Rock]);
        for (position, velocity) in p.kinematics_mut() {
            *velocity = Vec2::new(2, 3);
            *position += *velocity;
        }
        assert_eq!(p.tokens()[0].position, Vec2::new(2, 3));
        assert_eq!(p.tokens()[0].kind, TokenKind::Rock);
    }
}
