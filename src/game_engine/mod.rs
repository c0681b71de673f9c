//! Core game engine — round generation, feasibility checks, and the
//! selection state machine.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: configs, rounds, events, themes |
//! | `errors`    | Configuration and caller-contract errors |
//! | `feasible`  | Precomputed addend/distractor sets, validation, Fisher-Yates shuffle |
//! | `generator` | Single entry point `generate_round()` |
//! | `feedback`  | Styled notice text for every transition |
//! | `session`   | `GameSession` — the pick/deselect/evaluate state machine |

pub mod errors;
pub mod feasible;
pub mod feedback;
pub mod generator;
pub mod models;
pub mod session;

// Re-export the public API surface so callers can use
// `game_engine::generate_round` without reaching into sub-modules.
pub use errors::{ConfigError, OutOfRangePick};
pub use generator::{generate_round, generate_round_with};
pub use models::{
    NoticeStyle, Outcome, PickEvent, Round, RoundConfig, RoundRequest, SelectionState, Theme,
};
pub use session::GameSession;
