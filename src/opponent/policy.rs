//! The computer opponent's turn selection.
//!
//! The opponent either exploits a remembered pair or explores two unknown
//! positions. A fixed fallibility constant keeps it beatable: even with a
//! pair in memory it plays the pair only 45% of the time.

use crate::core::GameRng;

use super::memory::OpponentMemory;

/// Probability that the opponent ignores a known pair and explores instead.
/// This is a deliberate handicap, not a bug.
pub const ERROR_RATE: f64 = 0.55;

/// Choose the two positions the computer flips this turn.
///
/// `available` must hold the deck positions not yet matched. Returns `None`
/// when fewer than two remain; the caller ends the turn immediately.
pub fn choose(
    available: &[usize],
    memory: &OpponentMemory,
    rng: &mut GameRng,
) -> Option<(usize, usize)> {
    let roll = rng.gen_unit();
    choose_with_roll(available, memory, roll, rng)
}

/// `choose` with the exploit/explore roll supplied by the caller.
///
/// With `roll >= ERROR_RATE` and a pair in memory, the pair is played.
/// Otherwise two distinct positions are drawn uniformly without replacement;
/// a random draw landing on a known pair is exploration, not exploitation,
/// and is allowed. The returned order is the reveal order.
pub fn choose_with_roll(
    available: &[usize],
    memory: &OpponentMemory,
    roll: f64,
    rng: &mut GameRng,
) -> Option<(usize, usize)> {
    if available.len() < 2 {
        return None;
    }

    if roll >= ERROR_RATE {
        if let Some(pair) = memory.known_pair() {
            return Some(pair);
        }
    }

    let mut pool = available.to_vec();
    rng.shuffle(&mut pool);
    Some((pool[0], pool[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_available() {
        let memory = OpponentMemory::new();
        let mut rng = GameRng::new(1);

        assert_eq!(choose(&[], &memory, &mut rng), None);
        assert_eq!(choose(&[5], &memory, &mut rng), None);
    }

    #[test]
    fn test_exploit_plays_known_pair() {
        use crate::core::Identity;

        let mut memory = OpponentMemory::new();
        memory.record(Identity::Milk, 3);
        memory.record(Identity::Milk, 9);

        let available = vec![0, 1, 2, 3, 5, 9, 12];
        let mut rng = GameRng::new(1);

        let pair = choose_with_roll(&available, &memory, 0.9, &mut rng);
        assert_eq!(pair, Some((3, 9)));
    }

    #[test]
    fn test_explore_on_low_roll() {
        use crate::core::Identity;

        let mut memory = OpponentMemory::new();
        memory.record(Identity::Milk, 3);
        memory.record(Identity::Milk, 9);

        let available = vec![0, 1, 2, 3, 5, 9, 12];
        let mut rng = GameRng::new(1);

        let (first, second) = choose_with_roll(&available, &memory, 0.1, &mut rng).unwrap();
        assert_ne!(first, second);
        assert!(available.contains(&first));
        assert!(available.contains(&second));
    }

    #[test]
    fn test_high_roll_without_memory_falls_back_to_explore() {
        let memory = OpponentMemory::new();
        let available = vec![4, 7];
        let mut rng = GameRng::new(3);

        let (first, second) = choose_with_roll(&available, &memory, 0.99, &mut rng).unwrap();
        assert_ne!(first, second);
        assert!(available.contains(&first));
        assert!(available.contains(&second));
    }

    #[test]
    fn test_explore_is_uniform_without_replacement() {
        let memory = OpponentMemory::new();
        let available: Vec<usize> = (0..16).collect();
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            let (first, second) = choose(&available, &memory, &mut rng).unwrap();
            assert_ne!(first, second);
            assert!(first < 16 && second < 16);
        }
    }
}
