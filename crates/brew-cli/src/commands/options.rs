//! `brew options` — list option categories and default selections.

use std::fmt::Write;

use anyhow::Result;
use brew_core::OptionCategory;
use brew_state::DocumentDb;
use brew_store::BeverageStore;
use serde_json::{Value, json};

use super::{OutputFormat, StoreTarget, open_store};

pub async fn list(target: &StoreTarget, format: OutputFormat) -> Result<()> {
    let store = open_store(target).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options_json(&store))?),
        OutputFormat::Text => print!("{}", format_options(&store)),
    }
    Ok(())
}

fn options_json<D: DocumentDb>(store: &BeverageStore<D>) -> Value {
    let mut out = serde_json::Map::new();
    for category in OptionCategory::ALL {
        out.insert(
            category.collection().to_string(),
            json!({
                "items": store.options(category),
                "current": store.current(category),
            }),
        );
    }
    Value::Object(out)
}

fn format_options<D: DocumentDb>(store: &BeverageStore<D>) -> String {
    let mut out = String::new();
    for category in OptionCategory::ALL {
        let current = store.current(category).map(|item| item.id.as_str());
        let _ = writeln!(out, "{}:", category.collection());
        if store.options(category).is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for item in store.options(category) {
            let marker = if Some(item.id.as_str()) == current { '*' } else { ' ' };
            let _ = writeln!(out, "{marker} {:<4} {:<14} {}", item.id, item.name, item.color);
        }
    }
    out
}
