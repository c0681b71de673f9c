//! Player-facing notice text.
//!
//! Every state transition carries a renderable notice. `Plain` keeps the
//! neutral prototype wording; `Story` retells the same information through
//! the theme's character and items. The transition itself is identical in
//! both modes — only the wording changes.

use crate::game_engine::models::{NoticeStyle, Theme};

/// Pick the right wording based on the active notice style.
pub fn styled(style: NoticeStyle, plain: String, story: String) -> String {
    match style {
        NoticeStyle::Plain => plain,
        NoticeStyle::Story => story,
    }
}

/// Shown when a round starts.
pub fn round_prompt(style: NoticeStyle, theme: &Theme, target: u32) -> String {
    styled(
        style,
        "Select two cards to combine!".to_string(),
        format!(
            "Help {} pick up {} {}! Which two groups match the total?",
            theme.character, target, theme.item_name
        ),
    )
}

/// Shown after the first card of a pair is selected.
pub fn one_picked(style: NoticeStyle, target: u32) -> String {
    styled(
        style,
        "One set selected. Choose the second set!".to_string(),
        format!("Great! Pick one more group to make {target}."),
    )
}

/// Shown after a card is deselected.
pub fn deselected(style: NoticeStyle, theme: &Theme, target: u32) -> String {
    styled(
        style,
        "Deselected. Choose two cards!".to_string(),
        format!(
            "Deselected. Help {} find the correct groups to make {}.",
            theme.character, target
        ),
    )
}

/// Shown when a third card is picked while two are selected.
pub fn already_two(style: NoticeStyle) -> String {
    styled(
        style,
        "Two numbers selected! Deselect one to change your choice.".to_string(),
        "You've already picked two! Deselect one to change your choice.".to_string(),
    )
}

/// Shown on any pick after the round has been solved.
pub fn solved_locked(style: NoticeStyle, theme: &Theme) -> String {
    styled(
        style,
        "Round solved! Start a new round for another challenge.".to_string(),
        format!(
            "All the {} are already connected! Start a new round for the next delivery.",
            theme.item_name
        ),
    )
}

/// Shown when the selected pair matches the target.
pub fn success(
    style: NoticeStyle,
    theme: &Theme,
    first: u32,
    second: u32,
    target: u32,
) -> String {
    styled(
        style,
        format!(
            "CORRECT! You combined the two sets to match the big set! \
             ({first} + {second} = {target}). Start a new round for a new challenge."
        ),
        format!(
            "All Aboard! You helped {} connect {} {}! ({} + {} = {}).",
            theme.character, target, theme.item_name, first, second, target
        ),
    )
}

/// Shown when the selected pair misses the target.
pub fn failure(style: NoticeStyle, theme: &Theme, sum: u32, target: u32) -> String {
    styled(
        style,
        format!("Oops! That combined set makes {sum}, not {target}. Try a different pair!"),
        format!(
            "Oops! That makes {}. {} still needs {}! Try again.",
            sum, theme.character, target
        ),
    )
}
