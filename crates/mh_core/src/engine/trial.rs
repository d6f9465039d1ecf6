//! Pure trial math for a single Monty Hall round.
//!
//! All functions here are pure: randomness comes in through the `Rng`
//! argument, so every outcome is reproducible from the caller's seed.

use rand::Rng;

use crate::models::{DoorIndex, Strategy, TrialOutcome, DOOR_COUNT};

/// Door the host opens after the contestant's initial pick.
///
/// Deterministic tie-break: scan forward from the prize and take the first
/// door that is neither the prize nor the pick.
#[inline]
pub fn reveal_losing_door(prize: DoorIndex, initial_pick: DoorIndex) -> DoorIndex {
    let next = (prize + 1) % 3;
    if next == initial_pick {
        (prize + 2) % 3
    } else {
        next
    }
}

/// The one closed door left after the reveal. Door indices 0, 1, 2 sum to 3.
#[inline]
pub fn switch_pick(initial_pick: DoorIndex, revealed: DoorIndex) -> DoorIndex {
    3 - initial_pick - revealed
}

/// Play one full round with the given strategy.
pub fn run_trial(strategy: Strategy, rng: &mut impl Rng) -> TrialOutcome {
    let prize = rng.gen_range(0..DOOR_COUNT as DoorIndex);
    let initial_pick = rng.gen_range(0..DOOR_COUNT as DoorIndex);

    let mut doors = [false; DOOR_COUNT];
    doors[prize as usize] = true;

    let revealed = reveal_losing_door(prize, initial_pick);
    let final_pick = match strategy {
        Strategy::Switch => switch_pick(initial_pick, revealed),
        Strategy::Stay => initial_pick,
    };

    TrialOutcome {
        prize,
        initial_pick,
        revealed,
        final_pick,
        strategy,
        won: doors[final_pick as usize],
    }
}

// ============================================================================
// Tests
// ============================================================================
