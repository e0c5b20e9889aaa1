//! The computer opponent's imperfect recall of card positions.
//!
//! Memory maps each identity to the positions it has been seen at, capped at
//! two per identity. It is derivable state: refreshing from the deck and the
//! current matched-set fully rebuilds it, so staleness cannot accumulate
//! across turns. Entries whose pair has been resolved are purged on refresh
//! and on a confirmed match.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Deck, Identity};

/// Accumulated knowledge of which identity was seen at which position.
#[derive(Clone, Debug, Default)]
pub struct OpponentMemory {
    entries: FxHashMap<Identity, SmallVec<[usize; 2]>>,
}

impl OpponentMemory {
    /// Create an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `identity` was seen at `position`.
    ///
    /// Deduplicated and capped at two positions per identity; recording a
    /// third distinct position is a no-op.
    pub fn record(&mut self, identity: Identity, position: usize) {
        let entry = self.entries.entry(identity).or_default();
        if !entry.contains(&position) && entry.len() < 2 {
            entry.push(position);
        }
    }

    /// Rebuild knowledge from the deck and the current matched-set.
    ///
    /// Every unmatched position is recorded, then any entry whose two
    /// positions are both already matched is dropped. Must run before each
    /// `choose`, because matches from prior turns invalidate stale entries.
    pub fn refresh(&mut self, deck: &Deck, matched: &ImHashSet<usize>) {
        for card in deck.cards() {
            if matched.contains(&card.position) {
                continue;
            }
            self.record(card.identity, card.position);
        }

        self.entries
            .retain(|_, positions| !(positions.len() == 2 && positions.iter().all(|p| matched.contains(p))));
    }

    /// Drop everything known about an identity (its pair was just matched).
    pub fn forget(&mut self, identity: Identity) {
        self.entries.remove(&identity);
    }

    /// Drop all knowledge (game restart).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Known positions for an identity, if any.
    #[must_use]
    pub fn positions_of(&self, identity: Identity) -> Option<&[usize]> {
        self.entries.get(&identity).map(|positions| positions.as_slice())
    }

    /// A complete pair, if one is known.
    ///
    /// Ties break by identity order so that exploitation is deterministic
    /// and a game replays identically from its seed.
    #[must_use]
    pub fn known_pair(&self) -> Option<(usize, usize)> {
        self.entries
            .iter()
            .filter(|(_, positions)| positions.len() == 2)
            .min_by_key(|(identity, _)| identity.index())
            .map(|(_, positions)| (positions[0], positions[1]))
    }

    /// Number of identities with at least one known position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is known yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Tier};

    #[test]
    fn test_record_dedup_and_cap() {
        let mut memory = OpponentMemory::new();

        memory.record(Identity::Milk, 3);
        memory.record(Identity::Milk, 3);
        memory.record(Identity::Milk, 9);
        memory.record(Identity::Milk, 14); // Over cap, ignored

        assert_eq!(memory.positions_of(Identity::Milk), Some(&[3, 9][..]));
    }

    #[test]
    fn test_refresh_records_all_unmatched() {
        let mut rng = GameRng::new(42);
        let deck = Deck::build(Tier::Easy, &mut rng);
        let matched = ImHashSet::new();

        let mut memory = OpponentMemory::new();
        memory.refresh(&deck, &matched);

        // Every identity has both positions recorded
        assert_eq!(memory.len(), 8);
        for &identity in Tier::Easy.alphabet() {
            let positions = memory.positions_of(identity).unwrap();
            assert_eq!(positions.len(), 2);
        }
    }

    #[test]
    fn test_refresh_skips_matched_and_purges_resolved() {
        let mut rng = GameRng::new(42);
        let deck = Deck::build(Tier::Easy, &mut rng);

        let bread: Vec<usize> = deck.positions_of(Identity::Bread).collect();
        let mut matched = ImHashSet::new();
        matched.insert(bread[0]);
        matched.insert(bread[1]);

        let mut memory = OpponentMemory::new();
        // Seed memory with the pair, as if seen on an earlier turn
        memory.record(Identity::Bread, bread[0]);
        memory.record(Identity::Bread, bread[1]);

        memory.refresh(&deck, &matched);

        assert_eq!(memory.positions_of(Identity::Bread), None);
        assert_eq!(memory.len(), 7);

        // Invariant: no entry has both positions matched, none exceeds two
        for &identity in Tier::Easy.alphabet() {
            if let Some(positions) = memory.positions_of(identity) {
                assert!(positions.len() <= 2);
                assert!(!positions.iter().all(|p| matched.contains(p)));
            }
        }
    }

    #[test]
    fn test_known_pair_prefers_lowest_identity() {
        let mut memory = OpponentMemory::new();

        memory.record(Identity::Peas, 4);
        memory.record(Identity::Peas, 11);
        memory.record(Identity::Carrot, 2);
        memory.record(Identity::Carrot, 7);
        memory.record(Identity::Bread, 5); // Incomplete, not a pair

        assert_eq!(memory.known_pair(), Some((2, 7)));
    }

    #[test]
    fn test_known_pair_none_when_incomplete() {
        let mut memory = OpponentMemory::new();
        assert_eq!(memory.known_pair(), None);

        memory.record(Identity::Eggs, 1);
        assert_eq!(memory.known_pair(), None);
    }

    #[test]
    fn test_forget_and_clear() {
        let mut memory = OpponentMemory::new();
        memory.record(Identity::Corn, 0);
        memory.record(Identity::Corn, 6);
        memory.record(Identity::Flour, 3);

        memory.forget(Identity::Corn);
        assert_eq!(memory.positions_of(Identity::Corn), None);
        assert_eq!(memory.len(), 1);

        memory.clear();
        assert!(memory.is_empty());
    }
}
