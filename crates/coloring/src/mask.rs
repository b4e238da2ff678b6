//! Legality rule for actions.
//!
//! The mask is a view derived from a [`State`] every time it is needed; it is
//! never stored as authoritative data.

use crate::color::Color;
use crate::error::InvalidReason;
use crate::state::State;

/// Boolean mask over the `max_colors` actions for the current node.
///
/// `mask[k]` is `true` iff no already-colored neighbour of the current node
/// uses color `k`. Unassigned neighbours impose nothing. Once every node is
/// colored the mask is all `false`.
#[must_use]
pub fn action_mask(state: &State, max_colors: usize) -> Vec<bool> {
    let mut mask = vec![!state.is_terminal(); max_colors];
    if state.is_terminal() {
        return mask;
    }
    for j in state.graph().neighbours(state.current_node_index()) {
        if let Color::Assigned(k) = state.colors()[j] {
            if let Some(slot) = mask.get_mut(k) {
                *slot = false;
            }
        }
    }
    mask
}

/// Checks a single action against the mask and explains a rejection.
///
/// Expects a non-terminal state.
pub(crate) fn check_action(
    state: &State,
    max_colors: usize,
    action: usize,
) -> Result<(), InvalidReason> {
    if action >= max_colors {
        return Err(InvalidReason::OutOfRange { max_colors });
    }
    let node = state.current_node_index();
    match state
        .graph()
        .neighbours(node)
        .find(|&j| state.colors()[j] == Color::Assigned(action))
    {
        Some(neighbour) => Err(InvalidReason::ColorTaken { neighbour }),
        None => Ok(()),
    }
}
