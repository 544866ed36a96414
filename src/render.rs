//! Card descriptors and the boundary surface they are pushed through.
//!
//! Rendering fully replaces the displayed set every time; there is no
//! incremental diffing. An empty query result and a failed load are distinct
//! placeholder states.

use crate::catalog::{GameRecord, ImageRef};

/// Everything the boundary needs to draw one card, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub title: String,
    pub link: String,
    pub image: ImageRef,
    pub game_type: String,
    pub player_count: String,
    pub time: String,
    pub maturity: String,
    pub brainload: String,
    pub description: String,
}

impl CardView {
    pub fn from_record(record: &GameRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            link: record.link.clone(),
            image: record.image.clone(),
            game_type: record.game_type.clone(),
            player_count: record.player_count.clone(),
            time: record.time.clone(),
            maturity: record.maturity.clone(),
            brainload: record.brainload.clone(),
            description: record.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The collection loaded but the current criteria match nothing.
    NoMatches,
    /// The one fetch failed; shown once, for the rest of the session.
    LoadFailed,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::NoMatches => "No games match your filters.",
            Placeholder::LoadFailed => "Failed to load games catalog.",
        }
    }
}

/// Boundary contract: clear-and-repopulate cards, placeholders, and the
/// overlay regions. Implementations decide presentation entirely.
pub trait Surface {
    fn replace_cards(&mut self, cards: &[CardView]);
    fn show_placeholder(&mut self, placeholder: Placeholder);
    fn show_overlay(&mut self, title: &str, body: &str);
    fn hide_overlay(&mut self);
}

/// Build the card descriptors for an ordered, already-evaluated subset.
pub fn cards_for(records: &[&GameRecord]) -> Vec<CardView> {
    records.iter().map(|r| CardView::from_record(r)).collect()
}

/// Plain-text surface for the terminal front end.
pub struct TermSurface;

impl TermSurface {
    fn image_line(image: &ImageRef) -> String {
        match image {
            ImageRef::Url(url) => format!("image: {}", url),
            ImageRef::Fallback => "[no image]".to_string(),
        }
    }
}

impl Surface for TermSurface {
    fn replace_cards(&mut self, cards: &[CardView]) {
        println!("---- {} game(s) ----", cards.len());
        for card in cards {
            println!("#{} {}  <{}>", card.id, card.title, card.link);
            println!("  {}", Self::image_line(&card.image));
            println!(
                "  {} | {} players | {} | {} | {}",
                card.game_type, card.player_count, card.time, card.maturity, card.brainload
            );
            println!("  {}", card.description);
            println!("  [rules {}] to view rules", card.id);
        }
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        println!("---- {} ----", placeholder.message());
    }

    fn show_overlay(&mut self, title: &str, body: &str) {
        println!("==== {} ====", title);
        println!("{}", body);
        println!("==== [close] to dismiss ====");
    }

    fn hide_overlay(&mut self) {
        println!("==== overlay closed ====");
    }
}

/// Records every boundary call. Used by tests to assert what was shown.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub card_batches: Vec<Vec<CardView>>,
    pub placeholders: Vec<Placeholder>,
    pub overlays: Vec<(String, String)>,
    pub hides: usize,
}

impl Surface for RecordingSurface {
    fn replace_cards(&mut self, cards: &[CardView]) {
        self.card_batches.push(cards.to_vec());
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.placeholders.push(placeholder);
    }

    fn show_overlay(&mut self, title: &str, body: &str) {
        self.overlays.push((title.to_string(), body.to_string()));
    }

    fn hide_overlay(&mut self) {
        self.hides += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::record;

    #[test]
    fn test_cards_preserve_order_and_ids() {
        let a = record(1, "Azul", "2-4");
        let b = record(2, "Brass", "2-4");
        let ordered = vec![&b, &a];
        let cards = cards_for(&ordered);
        let ids: Vec<u32> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(cards[0].title, "Brass");
    }

    #[test]
    fn test_placeholder_messages_distinct() {
        assert_ne!(Placeholder::NoMatches.message(), Placeholder::LoadFailed.message());
    }

    #[test]
    fn test_recording_surface_captures_calls() {
        let mut surface = RecordingSurface::default();
        surface.replace_cards(&[]);
        surface.show_placeholder(Placeholder::NoMatches);
        surface.show_overlay("T", "B");
        surface.hide_overlay();
        assert_eq!(surface.card_batches.len(), 1);
        assert_eq!(surface.placeholders, vec![Placeholder::NoMatches]);
        assert_eq!(surface.overlays, vec![("T".to_string(), "B".to_string())]);
        assert_eq!(surface.hides, 1);
    }
}
