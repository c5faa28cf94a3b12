//! Pointer routing from canvas coordinates to puzzle operations

use crate::layout::ScreenLayout;
use facematch_core::{dispatch, AttemptResult, InputOutcome, PuzzleState, RandomSource};

/// Apply a click at `(x, y)`; `None` when it lands on nothing clickable
pub fn route_click<R: RandomSource>(
    layout: &ScreenLayout,
    state: &mut PuzzleState<R>,
    x: f64,
    y: f64,
) -> Option<InputOutcome> {
    let (region, slot) = layout.hit_test(x, y)?;
    let target = dispatch(region, slot)?;
    Some(state.apply(target))
}

/// Console line for an outcome worth logging
pub fn describe(outcome: &InputOutcome) -> Option<String> {
    match outcome {
        InputOutcome::Selected(attribute, value) => Some(format!("selected {} {}", attribute, value)),
        InputOutcome::Attempt(AttemptResult::Ignored) => None,
        InputOutcome::Attempt(AttemptResult::Mismatched) => Some("attempt: try again".to_string()),
        InputOutcome::Attempt(AttemptResult::Matched { advance: None }) => {
            Some("attempt: matched".to_string())
        }
        InputOutcome::Attempt(AttemptResult::Matched {
            advance: Some(ticket),
        }) => Some(format!(
            "level complete, advancing to {} in {} ms",
            ticket.next_level() + 1,
            ticket.delay().as_millis()
        )),
        InputOutcome::LevelChanged(level) => Some(format!("level {} loaded", level + 1)),
        InputOutcome::FrontEnd(action) => Some(format!("menu: {:?}", action)),
    }
}
