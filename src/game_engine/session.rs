//! The selection state machine.
//!
//! A [`GameSession`] owns exactly one [`Round`] and the current selection of
//! up to two pool positions. Picks move the selection through
//! `Empty -> OnePicked -> TwoPicked`; reaching two cards evaluates the pair
//! immediately. A success latches the round as solved (the selection is not
//! clearable afterwards — starting a new round is the only reset), a failure
//! clears the selection back to `Empty`.
//!
//! Every transition is total: any in-range pick in any state yields a
//! defined [`PickEvent`], and out-of-range picks are reported as a caller
//! error instead of being silently ignored.

use crate::game_engine::{
    errors::OutOfRangePick,
    feedback,
    models::{NoticeStyle, Outcome, PickEvent, Round, SelectionState, Theme},
};

/// Controller owning the current round and selection.
///
/// Replaces the hidden global round/selection state of the source
/// prototypes: both are owned here exclusively and replaced wholesale on
/// [`start_round`](GameSession::start_round), never mutated piecewise across
/// rounds.
#[derive(Debug, Clone)]
pub struct GameSession {
    round: Round,
    picks: Vec<usize>,
    solved: bool,
    style: NoticeStyle,
    theme: Theme,
}

impl GameSession {
    pub fn new(round: Round, style: NoticeStyle, theme: Theme) -> Self {
        GameSession {
            round,
            picks: Vec::with_capacity(2),
            solved: false,
            style,
            theme,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Selected pool positions, in pick order.
    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    pub fn state(&self) -> SelectionState {
        match self.picks.len() {
            0 => SelectionState::Empty,
            1 => SelectionState::OnePicked,
            _ => SelectionState::TwoPicked,
        }
    }

    /// Whether the current round has been solved. A solved round rejects all
    /// further picks until a new round starts.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn notice_style(&self) -> NoticeStyle {
        self.style
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The notice shown when the round starts.
    pub fn prompt(&self) -> String {
        feedback::round_prompt(self.style, &self.theme, self.round.target)
    }

    /// Replace the round wholesale and reset the selection.
    pub fn start_round(&mut self, round: Round) {
        self.round = round;
        self.picks.clear();
        self.solved = false;
    }

    /// Handle one "pick position" action from the presentation layer.
    ///
    /// Returns `Err` only for positions outside the pool; every in-range
    /// pick, in every state, yields a defined event.
    pub fn pick(&mut self, position: usize) -> Result<PickEvent, OutOfRangePick> {
        if position >= self.round.pool.len() {
            return Err(OutOfRangePick {
                position,
                pool_size: self.round.pool.len(),
            });
        }

        if let Some(idx) = self.picks.iter().position(|&p| p == position) {
            // A solved pair stays locked; deselection needs a new round.
            if self.solved {
                return Ok(PickEvent::Rejected {
                    notice: feedback::solved_locked(self.style, &self.theme),
                });
            }
            self.picks.remove(idx);
            return Ok(PickEvent::Deselected {
                state: self.state(),
                notice: feedback::deselected(self.style, &self.theme, self.round.target),
            });
        }

        if self.picks.len() == 2 {
            return Ok(PickEvent::Rejected {
                notice: feedback::already_two(self.style),
            });
        }

        self.picks.push(position);
        if self.picks.len() < 2 {
            return Ok(PickEvent::Selected {
                state: self.state(),
                notice: feedback::one_picked(self.style, self.round.target),
            });
        }
        Ok(self.evaluate())
    }

    /// Entered only on the transition into `TwoPicked`.
    fn evaluate(&mut self) -> PickEvent {
        let first = self.round.pool[self.picks[0]];
        let second = self.round.pool[self.picks[1]];
        let target = self.round.target;
        let sum = first + second;

        if sum == target {
            self.solved = true;
            PickEvent::Evaluated {
                outcome: Outcome::Success {
                    first,
                    second,
                    target,
                },
                notice: feedback::success(self.style, &self.theme, first, second, target),
            }
        } else {
            self.picks.clear();
            PickEvent::Evaluated {
                outcome: Outcome::Failure { sum, target },
                notice: feedback::failure(self.style, &self.theme, sum, target),
            }
        }
    }
}
