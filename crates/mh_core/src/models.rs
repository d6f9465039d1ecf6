//! Core data types shared by the engine and the reporters.

/// Index of a door, always in `0..DOOR_COUNT`.
pub type DoorIndex = u8;

/// Number of doors in the game. The trial math assumes exactly three.
pub const DOOR_COUNT: usize = 3;

/// What the contestant does after the host opens a losing door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Abandon the initial pick for the one remaining closed door.
    Switch,
    /// Keep the initial pick.
    Stay,
}

impl Strategy {
    /// Strategy for the trial at `index` within a batch.
    ///
    /// Even indices switch, odd indices stay, so an odd batch size gives
    /// the extra trial to `Switch`.
    #[inline]
    pub fn for_trial_index(index: u64) -> Self {
        if index % 2 == 0 {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }
}

/// Full record of a single simulated round.
#[derive(Debug, Clone, Copy)]
pub struct TrialOutcome {
    pub prize: DoorIndex,
    pub initial_pick: DoorIndex,
    pub revealed: DoorIndex,
    pub final_pick: DoorIndex,
    pub strategy: Strategy,
    pub won: bool,
}

/// Win counter for one strategy within a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrategyTally {
    pub trials: u64,
    pub wins: u64,
}

impl StrategyTally {
    pub fn record(&mut self, won: bool) {
        self.trials += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Observed win frequency. Zero when no trials were recorded.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins as f64 / self.trials as f64
    }
}

/// Aggregated result of one batch of trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchResult {
    pub requested_trials: u64,
    pub switch: StrategyTally,
    pub stay: StrategyTally,
}

// ============================================================================
// Tests
// ============================================================================
