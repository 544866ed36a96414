//! Pure query evaluation: (collection, criteria) -> ordered subset.
//!
//! No side effects and no UI concerns. Filtering is AND-composed exact
//! equality per categorical attribute, search is a case-insensitive substring
//! test, and sorting is stable so equal keys keep load order.

use crate::catalog::GameRecord;

/// The four categorical attributes, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    GameType,
    PlayerCount,
    Maturity,
    Brainload,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::GameType,
        Attribute::PlayerCount,
        Attribute::Maturity,
        Attribute::Brainload,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::GameType => "Type",
            Attribute::PlayerCount => "Players",
            Attribute::Maturity => "Maturity",
            Attribute::Brainload => "Complexity",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Attribute::GameType => "game-type",
            Attribute::PlayerCount => "player-count",
            Attribute::Maturity => "maturity",
            Attribute::Brainload => "brainload",
        }
    }

    pub fn value_of<'a>(&self, record: &'a GameRecord) -> &'a str {
        match self {
            Attribute::GameType => &record.game_type,
            Attribute::PlayerCount => &record.player_count,
            Attribute::Maturity => &record.maturity,
            Attribute::Brainload => &record.brainload,
        }
    }
}

/// Current selection for one categorical control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PlayersAsc,
    PlayersDesc,
}

impl SortKey {
    /// Fixed display order for the sort control.
    pub const ALL: [SortKey; 4] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PlayersAsc,
        SortKey::PlayersDesc,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PlayersAsc => "players-asc",
            SortKey::PlayersDesc => "players-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PlayersAsc => "Players (Fewest)",
            SortKey::PlayersDesc => "Players (Most)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|k| k.key() == s)
    }
}

/// The combination of filter selections, search term, and sort key in effect.
#[derive(Debug, Clone, Default)]
pub struct QueryCriteria {
    pub game_type: Selection,
    pub player_count: Selection,
    pub maturity: Selection,
    pub brainload: Selection,
    pub search: String,
    pub sort: SortKey,
}

impl QueryCriteria {
    pub fn selection(&self, attr: Attribute) -> &Selection {
        match attr {
            Attribute::GameType => &self.game_type,
            Attribute::PlayerCount => &self.player_count,
            Attribute::Maturity => &self.maturity,
            Attribute::Brainload => &self.brainload,
        }
    }

    pub fn selection_mut(&mut self, attr: Attribute) -> &mut Selection {
        match attr {
            Attribute::GameType => &mut self.game_type,
            Attribute::PlayerCount => &mut self.player_count,
            Attribute::Maturity => &mut self.maturity,
            Attribute::Brainload => &mut self.brainload,
        }
    }
}

/// Caseless title comparison with a byte-order fallback on equal folds,
/// so sorting stays deterministic across platforms.
fn cmp_titles(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Evaluate the criteria against the full collection.
///
/// Returns borrowed records in their final display order. An empty result is
/// a normal output.
pub fn evaluate<'a>(records: &'a [GameRecord], criteria: &QueryCriteria) -> Vec<&'a GameRecord> {
    let mut out: Vec<&GameRecord> = records
        .iter()
        .filter(|r| {
            Attribute::ALL.iter().all(|attr| match criteria.selection(*attr) {
                Selection::All => true,
                Selection::Value(v) => attr.value_of(r) == v,
            })
        })
        .collect();

    if !criteria.search.is_empty() {
        let term = criteria.search.to_lowercase();
        out.retain(|r| {
            r.title.to_lowercase().contains(&term)
                || r.description.to_lowercase().contains(&term)
                || r.game_type.to_lowercase().contains(&term)
        });
    }

    match criteria.sort {
        SortKey::NameAsc => out.sort_by(|a, b| cmp_titles(&a.title, &b.title)),
        SortKey::NameDesc => out.sort_by(|a, b| cmp_titles(&b.title, &a.title)),
        SortKey::PlayersAsc => out.sort_by_key(|r| r.min_players()),
        SortKey::PlayersDesc => out.sort_by_key(|r| std::cmp::Reverse(r.min_players())),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::record;
    use crate::catalog::GameRecord;

    fn sample() -> Vec<GameRecord> {
        let mut catan = record(1, "Catan", "3-4");
        catan.game_type = "Strategy".to_string();
        catan.maturity = "Everyone".to_string();
        let mut chess = record(2, "Chess", "2");
        chess.game_type = "Strategy".to_string();
        chess.maturity = "Everyone".to_string();
        chess.brainload = "Heavy".to_string();
        let mut risk = record(3, "Risk", "2-6");
        risk.game_type = "War".to_string();
        risk.maturity = "Teen".to_string();
        vec![catan, chess, risk]
    }

    fn titles(result: &[&GameRecord]) -> Vec<String> {
        result.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_default_criteria_keeps_everything_name_sorted() {
        let records = sample();
        let result = evaluate(&records, &QueryCriteria::default());
        assert_eq!(titles(&result), vec!["Catan", "Chess", "Risk"]);
    }

    #[test]
    fn test_categorical_filter_exact_case_sensitive() {
        let records = sample();
        let criteria = QueryCriteria {
            game_type: Selection::Value("Strategy".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&evaluate(&records, &criteria)), vec!["Catan", "Chess"]);

        let criteria = QueryCriteria {
            game_type: Selection::Value("strategy".to_string()),
            ..Default::default()
        };
        assert!(evaluate(&records, &criteria).is_empty());
    }

    #[test]
    fn test_filters_and_compose() {
        let records = sample();
        let both = QueryCriteria {
            game_type: Selection::Value("Strategy".to_string()),
            brainload: Selection::Value("Heavy".to_string()),
            ..Default::default()
        };
        let type_only = QueryCriteria {
            game_type: Selection::Value("Strategy".to_string()),
            ..Default::default()
        };
        let brain_only = QueryCriteria {
            brainload: Selection::Value("Heavy".to_string()),
            ..Default::default()
        };

        let intersection: Vec<u32> = evaluate(&records, &type_only)
            .iter()
            .filter(|r| evaluate(&records, &brain_only).iter().any(|s| s.id == r.id))
            .map(|r| r.id)
            .collect();
        let combined: Vec<u32> = evaluate(&records, &both).iter().map(|r| r.id).collect();
        assert_eq!(combined, intersection);
        assert_eq!(combined, vec![2]);
    }

    #[test]
    fn test_search_case_insensitive_across_fields() {
        let records = sample();
        let by_title = QueryCriteria {
            search: "CHESS".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&evaluate(&records, &by_title)), vec!["Chess"]);

        let by_type = QueryCriteria {
            search: "war".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&evaluate(&records, &by_type)), vec!["Risk"]);

        let by_description = QueryCriteria {
            search: "risk desc".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&evaluate(&records, &by_description)), vec!["Risk"]);

        let absent = QueryCriteria {
            search: "zzz".to_string(),
            ..Default::default()
        };
        assert!(evaluate(&records, &absent).is_empty());
    }

    #[test]
    fn test_players_asc_ties_keep_load_order() {
        // Min counts: Catan=3, Chess=2, Risk=2. Chess and Risk tie on 2 and
        // must keep load order (Chess before Risk).
        let records = sample();
        let criteria = QueryCriteria {
            sort: SortKey::PlayersAsc,
            ..Default::default()
        };
        assert_eq!(titles(&evaluate(&records, &criteria)), vec!["Chess", "Risk", "Catan"]);
    }

    #[test]
    fn test_players_desc_is_reverse_up_to_ties() {
        let records = sample();
        let asc = QueryCriteria {
            sort: SortKey::PlayersAsc,
            ..Default::default()
        };
        let desc = QueryCriteria {
            sort: SortKey::PlayersDesc,
            ..Default::default()
        };
        let asc_keys: Vec<u32> = evaluate(&records, &asc).iter().map(|r| r.min_players()).collect();
        let mut desc_keys: Vec<u32> =
            evaluate(&records, &desc).iter().map(|r| r.min_players()).collect();
        desc_keys.reverse();
        assert_eq!(asc_keys, desc_keys);
    }

    #[test]
    fn test_name_desc_reverses_name_asc() {
        let records = sample();
        let desc = QueryCriteria {
            sort: SortKey::NameDesc,
            ..Default::default()
        };
        assert_eq!(titles(&evaluate(&records, &desc)), vec!["Risk", "Chess", "Catan"]);
    }

    #[test]
    fn test_evaluate_deterministic_and_idempotent() {
        let records = sample();
        let criteria = QueryCriteria {
            game_type: Selection::Value("Strategy".to_string()),
            search: "c".to_string(),
            sort: SortKey::PlayersDesc,
            ..Default::default()
        };
        let a: Vec<u32> = evaluate(&records, &criteria).iter().map(|r| r.id).collect();
        let b: Vec<u32> = evaluate(&records, &criteria).iter().map(|r| r.id).collect();
        assert_eq!(a, b);

        // Re-filtering an already-consistent subset changes nothing.
        let subset: Vec<GameRecord> = evaluate(&records, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let again: Vec<u32> = evaluate(&subset, &criteria).iter().map(|r| r.id).collect();
        assert_eq!(a, again);
    }

    #[test]
    fn test_search_and_filter_are_independent() {
        let records = sample();
        let criteria = QueryCriteria {
            maturity: Selection::Value("Teen".to_string()),
            search: "chess".to_string(),
            ..Default::default()
        };
        // Chess matches the search but not the maturity filter.
        assert!(evaluate(&records, &criteria).is_empty());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("players-desc"), Some(SortKey::PlayersDesc));
        assert_eq!(SortKey::parse("bogus"), None);
    }
}
