use std::io::BufRead;

use anyhow::Result;

use gamedex::config::Config;
use gamedex::loader;
use gamedex::logging::{log, obj, v_num, v_str, Domain, Level};
use gamedex::query::{Attribute, Selection, SortKey};
use gamedex::registry::{FilterRegistry, SEARCH_PLACEHOLDER};
use gamedex::render::{Placeholder, Surface, TermSurface};
use gamedex::session::{apply, reduce, SessionState, UiCommand, UiEvent};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let mut surface = TermSurface;

    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[("catalog_url", v_str(&cfg.catalog_url))]),
    );

    // The one fetch of the session. On failure the collection stays empty
    // and the failure placeholder is shown once; no retry.
    let source = loader::source_for(&cfg);
    let (catalog, report) = match loader::load(source.as_ref(), &cfg.list_field).await {
        Ok(loaded) => loaded,
        Err(err) => {
            log(
                Level::Error,
                Domain::Load,
                "load_failed",
                obj(&[
                    ("source", v_str(&source.describe())),
                    ("error", v_str(&err.to_string())),
                ]),
            );
            surface.show_placeholder(Placeholder::LoadFailed);
            return Ok(());
        }
    };

    log(
        Level::Info,
        Domain::Load,
        "loaded",
        obj(&[
            ("source", v_str(&report.source)),
            ("records", v_num(report.records as f64)),
            ("sha256", v_str(&report.sha256_hex)),
        ]),
    );

    // Controls derive once from the loaded collection and are never rebuilt.
    let registry = FilterRegistry::derive(catalog.records());
    let mut state = SessionState::new(catalog);

    print_controls(&registry);
    apply(&state.render_current(), &mut surface);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        if input == "filters" {
            print_controls(&registry);
            continue;
        }
        match parse_event(input, &registry) {
            Some(event) => {
                let commands = reduce(&mut state, event);
                log_commands(&commands);
                apply(&commands, &mut surface);
            }
            None => print_help(),
        }
    }

    log(Level::Info, Domain::System, "shutdown", obj(&[]));
    Ok(())
}

fn log_commands(commands: &[UiCommand]) {
    for command in commands {
        match command {
            UiCommand::ReplaceCards(cards) => log(
                Level::Debug,
                Domain::Render,
                "replace_cards",
                obj(&[("count", v_num(cards.len() as f64))]),
            ),
            UiCommand::ShowPlaceholder(p) => log(
                Level::Debug,
                Domain::Render,
                "placeholder",
                obj(&[("message", v_str(p.message()))]),
            ),
            UiCommand::ShowOverlay { title, .. } => log(
                Level::Debug,
                Domain::Overlay,
                "open",
                obj(&[("title", v_str(title))]),
            ),
            UiCommand::HideOverlay => log(Level::Debug, Domain::Overlay, "close", obj(&[])),
        }
    }
}

fn filter_event(
    registry: &FilterRegistry,
    attribute: Attribute,
    value: &str,
) -> UiEvent {
    if value != "all" && !registry.option(attribute).offers(value) {
        log(
            Level::Warn,
            Domain::Query,
            "unknown_filter_value",
            obj(&[
                ("attribute", v_str(attribute.key())),
                ("value", v_str(value)),
            ]),
        );
    }
    let selection = if value == "all" {
        Selection::All
    } else {
        Selection::Value(value.to_string())
    };
    UiEvent::SetFilter { attribute, selection }
}

fn parse_event(input: &str, registry: &FilterRegistry) -> Option<UiEvent> {
    let (command, rest) = match input.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (input, ""),
    };
    match command {
        "type" if !rest.is_empty() => Some(filter_event(registry, Attribute::GameType, rest)),
        "players" if !rest.is_empty() => Some(filter_event(registry, Attribute::PlayerCount, rest)),
        "maturity" if !rest.is_empty() => Some(filter_event(registry, Attribute::Maturity, rest)),
        "brainload" if !rest.is_empty() => Some(filter_event(registry, Attribute::Brainload, rest)),
        // Bare "search" clears the term.
        "search" => Some(UiEvent::SetSearch(rest.to_string())),
        "sort" => SortKey::parse(rest).map(UiEvent::SetSort),
        "rules" => rest.parse::<u32>().ok().map(UiEvent::OpenDetail),
        "close" if rest.is_empty() => Some(UiEvent::CloseDetail),
        _ => None,
    }
}

fn print_controls(registry: &FilterRegistry) {
    println!("Search: ({})", SEARCH_PLACEHOLDER);
    for option in registry.options() {
        println!("{}: {}", option.label, option.entries().join(" | "));
    }
    let sorts: Vec<String> = registry
        .sort_keys()
        .iter()
        .map(|k| format!("{} ({})", k.key(), k.label()))
        .collect();
    println!("Sort by: {}", sorts.join(" | "));
}

fn print_help() {
    println!(
        "commands: type|players|maturity|brainload <value|all>, search [term], \
         sort <name-asc|name-desc|players-asc|players-desc>, rules <id>, close, filters, quit"
    );
}
