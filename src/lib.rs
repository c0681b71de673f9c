//! # sum_match_gen
//!
//! A fully offline, deterministic round generator and selection engine for a
//! two-card addition matching game: a target sum is shown, a small pool of
//! numeric cards is dealt, and the player must pick exactly two cards whose
//! values add up to the target.
//!
//! ## How it works
//!
//! 1. Create a [`RoundRequest`] with a [`RoundConfig`] (two presets:
//!    [`RoundConfig::classic`] and [`RoundConfig::train`]) and an optional
//!    RNG seed.
//! 2. Call [`generate_round`] — the engine validates the configuration over
//!    its whole target range, draws a target and an addend pair from the
//!    precomputed feasible splits, fills the pool with distractors drawn
//!    without replacement, and shuffles it with Fisher-Yates.
//! 3. Feed the [`Round`] to a [`GameSession`] and forward the player's
//!    "pick position" actions to [`GameSession::pick`] — every transition
//!    returns a [`PickEvent`] with a ready-to-display notice, and completing
//!    a pair yields an [`Outcome`].
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same round every time — useful for tests and replays.
//! - **Never hangs**: infeasible configurations are rejected up front with a
//!   [`ConfigError`]; there are no unbounded rejection-sampling loops.
//! - **Two notice styles**: [`NoticeStyle::Plain`] and
//!   [`NoticeStyle::Story`] (themed wording via [`Theme`]); game logic is
//!   identical in both modes.
//!
//! ## Quick start
//!
//! ```rust
//! use sum_match_gen::{
//!     generate_round, GameSession, NoticeStyle, PickEvent, RoundConfig, RoundRequest, Theme,
//! };
//!
//! let round = generate_round(RoundRequest {
//!     config: RoundConfig::train(),
//!     rng_seed: Some(42),
//! })
//! .expect("the train preset always validates");
//!
//! let mut session = GameSession::new(round, NoticeStyle::Story, Theme::train());
//! println!("{}", session.prompt());
//!
//! let event = session.pick(0).expect("position 0 is inside the pool");
//! match event {
//!     PickEvent::Selected { notice, .. } => println!("{notice}"),
//!     other => println!("{}", other.notice()),
//! }
//! ```

pub mod client_adapter;
pub mod game_engine;

// Convenience re-exports so callers can use `sum_match_gen::generate_round`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    generate_round, generate_round_with, ConfigError, GameSession, NoticeStyle, Outcome,
    OutOfRangePick, PickEvent, Round, RoundConfig, RoundRequest, SelectionState, Theme,
};
