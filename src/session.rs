//! The dispatcher: every UI interaction becomes a discrete event, reduced
//! against a single state holder into commands for the boundary surface.
//!
//! The state holder owns the collection, the current criteria, and the
//! overlay state. The Query Engine never sees a UI concern; the boundary
//! never sees a record.

use crate::catalog::Catalog;
use crate::overlay::{apply_event, OverlayEffect, OverlayEvent, OverlayState};
use crate::query::{evaluate, Attribute, QueryCriteria, Selection, SortKey};
use crate::render::{cards_for, CardView, Placeholder, Surface};

/// One user interaction, boundary-agnostic.
#[derive(Debug, Clone)]
pub enum UiEvent {
    SetFilter { attribute: Attribute, selection: Selection },
    SetSearch(String),
    SetSort(SortKey),
    OpenDetail(u32),
    CloseDetail,
}

/// One instruction for the boundary.
#[derive(Debug, Clone)]
pub enum UiCommand {
    ReplaceCards(Vec<CardView>),
    ShowPlaceholder(Placeholder),
    ShowOverlay { title: String, body: String },
    HideOverlay,
}

pub struct SessionState {
    catalog: Catalog,
    criteria: QueryCriteria,
    overlay: OverlayState,
}

impl SessionState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: QueryCriteria::default(),
            overlay: OverlayState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Render commands for the current criteria, used for the initial paint.
    pub fn render_current(&self) -> Vec<UiCommand> {
        query_commands(self)
    }
}

fn query_commands(state: &SessionState) -> Vec<UiCommand> {
    let result = evaluate(state.catalog.records(), &state.criteria);
    if result.is_empty() {
        vec![UiCommand::ShowPlaceholder(Placeholder::NoMatches)]
    } else {
        vec![UiCommand::ReplaceCards(cards_for(&result))]
    }
}

/// Consume one event, mutate the state holder, emit boundary commands.
///
/// Criteria events always re-run the query and fully replace the card set.
pub fn reduce(state: &mut SessionState, event: UiEvent) -> Vec<UiCommand> {
    match event {
        UiEvent::SetFilter { attribute, selection } => {
            *state.criteria.selection_mut(attribute) = selection;
            query_commands(state)
        }
        UiEvent::SetSearch(term) => {
            state.criteria.search = term;
            query_commands(state)
        }
        UiEvent::SetSort(sort) => {
            state.criteria.sort = sort;
            query_commands(state)
        }
        UiEvent::OpenDetail(id) => {
            match apply_event(&mut state.overlay, OverlayEvent::Open(id), &state.catalog) {
                OverlayEffect::Show { title, body } => vec![UiCommand::ShowOverlay { title, body }],
                OverlayEffect::Hide => vec![UiCommand::HideOverlay],
                OverlayEffect::None => Vec::new(),
            }
        }
        UiEvent::CloseDetail => {
            match apply_event(&mut state.overlay, OverlayEvent::Close, &state.catalog) {
                OverlayEffect::Hide => vec![UiCommand::HideOverlay],
                _ => Vec::new(),
            }
        }
    }
}

/// Apply emitted commands to a surface.
pub fn apply(commands: &[UiCommand], surface: &mut dyn Surface) {
    for command in commands {
        match command {
            UiCommand::ReplaceCards(cards) => surface.replace_cards(cards),
            UiCommand::ShowPlaceholder(placeholder) => surface.show_placeholder(*placeholder),
            UiCommand::ShowOverlay { title, body } => surface.show_overlay(title, body),
            UiCommand::HideOverlay => surface.hide_overlay(),
        }
    }
}
