use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Round configuration
// ---------------------------------------------------------------------------

/// Tunables for one round family. All bounds are inclusive.
///
/// A configuration is checked up front by [`validate`](crate::game_engine::feasible::validate)
/// over its entire target range — generation never rejection-samples into an
/// empty acceptance set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Smallest target sum that may be drawn. Must be at least 2.
    pub target_min: u32,
    /// Largest target sum that may be drawn.
    pub target_max: u32,
    /// Total cards shown: the addend pair plus `pool_size - 2` distractors.
    pub pool_size: usize,
    /// Upper bound each addend of the correct pair may take.
    pub max_addend: u32,
    /// Upper bound for candidate distractor values.
    pub distractor_max: u32,
    /// Constrain distractors to be strictly less than the target.
    pub distractors_below_target: bool,
    /// Also forbid two distractors from summing to the target, so the pool
    /// contains exactly one valid pair of positions.
    pub forbid_distractor_pairs: bool,
}

impl RoundConfig {
    /// The 6-card hidden-count variant: values shown as dot groups, all
    /// distractors strictly below the target.
    ///
    /// Targets start at 7 — a 6-card pool cannot be filled with distinct
    /// below-target distractors for targets 5 and 6.
    pub fn classic() -> Self {
        RoundConfig {
            target_min: 7,
            target_max: 10,
            pool_size: 6,
            max_addend: 9,
            distractor_max: 9,
            distractors_below_target: true,
            forbid_distractor_pairs: false,
        }
    }

    /// The 3-card train variant: one distractor, addends capped at 7 so the
    /// carriage rows stay short enough to display.
    pub fn train() -> Self {
        RoundConfig {
            target_min: 2,
            target_max: 10,
            pool_size: 3,
            max_addend: 7,
            distractor_max: 7,
            distractors_below_target: false,
            forbid_distractor_pairs: true,
        }
    }

    /// Number of distractors this configuration asks for.
    pub fn distractor_count(&self) -> usize {
        self.pool_size.saturating_sub(2)
    }
}

/// Everything needed to generate one round.
///
/// `rng_seed: Some(u64)` reproduces the exact same round every time — useful
/// for tests and for replaying a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoundRequest {
    pub config: RoundConfig,
    pub rng_seed: Option<u64>,
}

impl RoundRequest {
    /// Request with entropy seeding.
    pub fn new(config: RoundConfig) -> Self {
        RoundRequest { config, rng_seed: None }
    }
}

// ---------------------------------------------------------------------------
// Round
// ---------------------------------------------------------------------------

/// One generated round: a target sum and a shuffled card pool that contains
/// an addend pair for it. Immutable for the round's lifetime; a session
/// replaces it wholesale on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round_id: String,
    pub target: u32,
    /// The generated correct pair, smaller addend first. Exposed so a client
    /// can offer hints; the player still selects by position.
    pub addends: (u32, u32),
    /// Shuffled card values, addressed by position.
    pub pool: Vec<u32>,
}

impl Round {
    /// Value at `position`, if the position is inside the pool.
    pub fn value(&self, position: usize) -> Option<u32> {
        self.pool.get(position).copied()
    }
}

// ---------------------------------------------------------------------------
// Selection & outcomes
// ---------------------------------------------------------------------------

/// How many cards are currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    Empty,
    OnePicked,
    TwoPicked,
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionState::Empty => write!(f, "empty"),
            SelectionState::OnePicked => write!(f, "one-picked"),
            SelectionState::TwoPicked => write!(f, "two-picked"),
        }
    }
}

/// Result of evaluating a completed selection. Derived, never stored: it is
/// computed each time the selection reaches two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success { first: u32, second: u32, target: u32 },
    Failure { sum: u32, target: u32 },
}

/// What a single pick did, with the player-facing notice to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickEvent {
    /// A card was selected; fewer than two are selected afterwards.
    Selected { state: SelectionState, notice: String },
    /// A previously selected card was deselected.
    Deselected { state: SelectionState, notice: String },
    /// The pick was refused: two cards already selected, or round solved.
    Rejected { notice: String },
    /// The second card was selected and the pair was evaluated.
    Evaluated { outcome: Outcome, notice: String },
}

impl PickEvent {
    pub fn notice(&self) -> &str {
        match self {
            PickEvent::Selected { notice, .. }
            | PickEvent::Deselected { notice, .. }
            | PickEvent::Rejected { notice }
            | PickEvent::Evaluated { notice, .. } => notice,
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation metadata
// ---------------------------------------------------------------------------

/// Wording style for player-facing notices.
///
/// `Plain` is the neutral prototype wording; `Story` wraps every notice in
/// the theme's narrative (character, items to deliver). Game logic is
/// identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeStyle {
    Plain,
    Story,
}

/// Visual theme: how card values are drawn as repeated tokens, and who the
/// story notices talk about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Token repeated once per unit of a card's value.
    pub token: String,
    /// Optional token leading the success reward row.
    pub lead_token: Option<String>,
    /// Character named in story notices.
    pub character: String,
    /// Noun for the counted items ("carriages", "dots").
    pub item_name: String,
}

impl Theme {
    /// Train theme: carriage tokens pulled by a locomotive.
    pub fn train() -> Self {
        Theme {
            token: "\u{1F683}".to_string(),
            lead_token: Some("\u{1F682}".to_string()),
            character: "Timmy the Conductor".to_string(),
            item_name: "carriages".to_string(),
        }
    }

    /// Neutral counting theme: plain dots, no lead token.
    pub fn counters() -> Self {
        Theme {
            token: "\u{2022}".to_string(),
            lead_token: None,
            character: "the counter".to_string(),
            item_name: "dots".to_string(),
        }
    }
}
