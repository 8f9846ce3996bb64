use rps_core::TokenKind;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Live count of tokens per kind.
///
/// The ledger is only ever changed by one token at a time: a spawn adds one
/// to a kind, a conversion moves one from the old kind to the new kind. The
/// total therefore always equals the population size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    counts: [u32; TokenKind::COUNT],
}

impl ScoreLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the kinds of a sequence of tokens.
    pub fn tally<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = TokenKind>,
    {
        let mut ledger = Self::new();
        for kind in kinds {
            ledger.record_spawn(kind);
        }
        ledger
    }

    /// Live count of `kind`.
    pub fn count(&self, kind: TokenKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Sum over all kinds.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// One token of `kind` joined the population.
    pub fn record_spawn(&mut self, kind: TokenKind) {
        self.counts[kind.index()] += 1;
    }

    /// One token changed from `from` to `to`.
    pub fn record_conversion(&mut self, from: TokenKind, to: TokenKind) {
        debug_assert!(self.count(from) > 0, "ledger has no {from} to convert");
        self.counts[from.index()] -= 1;
        self.counts[to.index()] += 1;
    }

    /// `(kind, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, u32)> + '_ {
        TokenKind::ALL.into_iter().map(move |k| (k, self.count(k)))
    }

    /// Kinds with at least one live token.
    pub fn surviving(&self) -> Vec<TokenKind> {
        self.iter()
            .filter(|&(_, c)| c > 0)
            .map(|(k, _)| k)
            .collect()
    }

    /// The kind with the highest count. Ties go to the earlier kind in
    /// canonical order. `None` when the ledger is empty.
    pub fn leader(&self) -> Option<TokenKind> {
        let mut best: Option<(TokenKind, u32)> = None;
        for (kind, count) in self.iter() {
            if count > 0 && best.is_none_or(|(_, c)| count > c) {
                best = Some((kind, count));
            }
        }
        best.map(|(k, _)| k)
    }
}

impl Serialize for ScoreLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TokenKind::COUNT))?;
        for (kind, count) in self.iter() {
            map.serialize_entry(&kind, &count)?;
        }
        map.end()
    }
}
