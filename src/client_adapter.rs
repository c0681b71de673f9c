//! JSON payload builder for a browser client.
//!
//! The engine never touches a DOM; it hands the presentation layer one JSON
//! object per state transition. Card values are encoded as the numeral plus
//! a themed token line (one token per unit), so the client can render either
//! the number, the tokens, or both.

use serde_json::{json, Value};

use crate::game_engine::models::{Outcome, PickEvent, SelectionState, Theme};
use crate::game_engine::session::GameSession;

/// One token per unit of `value`, space-separated (e.g. "🚃 🚃 🚃").
fn token_line(value: u32, theme: &Theme) -> String {
    let mut line = String::new();
    for i in 0..value {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&theme.token);
    }
    line
}

/// Font size in em for the success reward row — long trains shrink so they
/// stay on one line.
fn reward_font_em(target: u32) -> f64 {
    if target <= 5 {
        1.3
    } else if target <= 8 {
        1.1
    } else {
        0.9
    }
}

fn state_str(state: SelectionState) -> &'static str {
    match state {
        SelectionState::Empty => "empty",
        SelectionState::OnePicked => "one_picked",
        SelectionState::TwoPicked => "two_picked",
    }
}

/// Build one card entry.
fn card_entry(position: usize, value: u32, selected: bool, theme: &Theme) -> Value {
    json!({
        "position": position,
        "value": value,
        "tokens": token_line(value, theme),
        "selected": selected
    })
}

fn outcome_value(outcome: &Outcome, theme: &Theme) -> Value {
    match *outcome {
        Outcome::Success {
            first,
            second,
            target,
        } => {
            // Reward row: optional lead token pulling one token per unit.
            let mut reward = String::new();
            if let Some(lead) = &theme.lead_token {
                reward.push_str(lead);
                reward.push(' ');
            }
            reward.push_str(&token_line(target, theme));
            json!({
                "kind": "success",
                "first": first,
                "second": second,
                "target": target,
                "reward_row": reward,
                "reward_font_em": reward_font_em(target)
            })
        }
        Outcome::Failure { sum, target } => json!({
            "kind": "failure",
            "sum": sum,
            "target": target
        }),
    }
}

/// Full renderable state of the current round: id, target (numeral and token
/// line), every card with its selection flag, and the opening prompt.
pub fn round_state(session: &GameSession) -> Value {
    let round = session.round();
    let theme = session.theme();
    let cards: Vec<Value> = round
        .pool
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            card_entry(position, value, session.picks().contains(&position), theme)
        })
        .collect();

    json!({
        "round_id": round.round_id,
        "target": {
            "value": round.target,
            "tokens": token_line(round.target, theme)
        },
        "cards": cards,
        "selection_state": state_str(session.state()),
        "solved": session.is_solved(),
        "prompt": session.prompt()
    })
}

/// Incremental update for one pick: what happened, the selection afterwards,
/// the notice to show, and the outcome when a pair was evaluated.
pub fn pick_update(session: &GameSession, event: &PickEvent) -> Value {
    let (kind, outcome) = match event {
        PickEvent::Selected { .. } => ("selected", Value::Null),
        PickEvent::Deselected { .. } => ("deselected", Value::Null),
        PickEvent::Rejected { .. } => ("rejected", Value::Null),
        PickEvent::Evaluated { outcome, .. } => ("evaluated", outcome_value(outcome, session.theme())),
    };

    json!({
        "kind": kind,
        "selection_state": state_str(session.state()),
        "selected_positions": session.picks(),
        "notice": event.notice(),
        "outcome": outcome
    })
}
