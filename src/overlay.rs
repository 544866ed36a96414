//! Rules overlay lifecycle: a two-state machine with explicit transitions.
//!
//! Exactly one overlay exists. Re-opening while open replaces the content
//! without passing through Closed; opening an id that does not resolve leaves
//! the state untouched.

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(u32),
}

#[derive(Debug, Clone, Copy)]
pub enum OverlayEvent {
    Open(u32),
    Close,
}

/// Outcome of a transition, for the boundary to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEffect {
    /// Show (or replace) the overlay with this title and body.
    Show { title: String, body: String },
    /// Hide the overlay.
    Hide,
    /// Nothing to do: unknown id, or close while already closed.
    None,
}

pub fn apply_event(state: &mut OverlayState, event: OverlayEvent, catalog: &Catalog) -> OverlayEffect {
    match (&*state, event) {
        (_, OverlayEvent::Open(id)) => match catalog.by_id(id) {
            Some(record) => {
                *state = OverlayState::Open(id);
                OverlayEffect::Show {
                    title: format!("{} Rules", record.title),
                    body: record.rules.clone(),
                }
            }
            // Tolerate a missing match: no transition, no error.
            None => OverlayEffect::None,
        },
        (OverlayState::Open(_), OverlayEvent::Close) => {
            *state = OverlayState::Closed;
            OverlayEffect::Hide
        }
        (OverlayState::Closed, OverlayEvent::Close) => OverlayEffect::None,
    }
}
