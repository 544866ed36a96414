//! Normalized catalog records and the raw document shape they come from.

use serde::Deserialize;

/// One entry as it appears in the source document.
#[derive(Deserialize, Debug)]
pub struct RawGame {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Rules")]
    pub rules: String,
    #[serde(rename = "Game-Type")]
    pub game_type: String,
    #[serde(rename = "Player-Count")]
    pub player_count: String,
    #[serde(rename = "Game-Time")]
    pub time: String,
    #[serde(rename = "Maturity")]
    pub maturity: String,
    #[serde(rename = "Brainload")]
    pub brainload: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Image")]
    pub image: Option<String>,
}

/// Image reference for a card. The boundary decides how to depict `Fallback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    Fallback,
}

/// One game's normalized attribute set. Immutable after load.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub rules: String,
    pub game_type: String,
    pub player_count: String,
    pub time: String,
    pub maturity: String,
    pub brainload: String,
    pub link: String,
    pub image: ImageRef,
}

impl GameRecord {
    fn from_raw(id: u32, raw: RawGame) -> Self {
        Self {
            id,
            title: raw.name,
            description: raw.description,
            rules: raw.rules,
            game_type: raw.game_type,
            player_count: raw.player_count,
            time: raw.time,
            maturity: raw.maturity,
            brainload: raw.brainload,
            link: raw.link,
            image: match raw.image {
                Some(url) => ImageRef::Url(url),
                None => ImageRef::Fallback,
            },
        }
    }

    /// Minimum player count: the first run of decimal digits in
    /// `player_count`, or 0 when there is none.
    pub fn min_players(&self) -> u32 {
        let digits: String = self
            .player_count
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }
}

/// The loaded collection: write-once, read-many.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Catalog {
    /// Normalize raw entries, assigning 1-based sequential ids in input order.
    pub fn from_raw(raw: Vec<RawGame>) -> Self {
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(i, g)| GameRecord::from_raw(i as u32 + 1, g))
            .collect();
        Self { records }
    }

    /// Wrap already-normalized records. Ids are taken as-is.
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lookup against the full collection, not any filtered view.
    pub fn by_id(&self, id: u32) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;

    pub fn record(id: u32, title: &str, players: &str) -> GameRecord {
        GameRecord {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            rules: format!("{} rules", title),
            game_type: "Board".to_string(),
            player_count: players.to_string(),
            time: "30m".to_string(),
            maturity: "Everyone".to_string(),
            brainload: "Light".to_string(),
            link: format!("https://example.com/{}", title.to_lowercase()),
            image: ImageRef::Fallback,
        }
    }
}
