//! `brew make`, `brew list`, `brew show` — make and revisit beverages.

use anyhow::Result;
use brew_core::{Beverage, OptionCategory};
use brew_state::DocumentDb;
use brew_store::BeverageStore;
use tracing::info;

use super::{OutputFormat, StoreTarget, open_store};

/// Option ids chosen on the command line.
#[derive(Debug, Default)]
pub struct Picks {
    pub base: Option<String>,
    pub creamer: Option<String>,
    pub syrup: Option<String>,
}

impl Picks {
    fn iter(&self) -> impl Iterator<Item = (OptionCategory, &str)> {
        [
            (OptionCategory::Base, self.base.as_deref()),
            (OptionCategory::Creamer, self.creamer.as_deref()),
            (OptionCategory::Syrup, self.syrup.as_deref()),
        ]
        .into_iter()
        .filter_map(|(category, id)| id.map(|id| (category, id)))
    }
}

pub async fn make(target: &StoreTarget, picks: Picks, format: OutputFormat) -> Result<()> {
    let mut store = open_store(target).await?;
    match make_with(&mut store, &picks).await? {
        Some(beverage) => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&beverage)?),
            OutputFormat::Text => println!("{}", format_beverage(&beverage)),
        },
        None => println!("nothing made: a base, a creamer, and a syrup are all required"),
    }
    Ok(())
}

async fn make_with<D: DocumentDb>(
    store: &mut BeverageStore<D>,
    picks: &Picks,
) -> Result<Option<Beverage>> {
    for (category, id) in picks.iter() {
        store.select_option(category, id)?;
    }
    Ok(store.make_beverage().await?)
}

pub async fn list(target: &StoreTarget, format: OutputFormat) -> Result<()> {
    let store = open_store(target).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(store.beverages())?),
        OutputFormat::Text => {
            if store.beverages().is_empty() {
                println!("no beverages yet");
            }
            for beverage in store.beverages() {
                println!("{}", format_beverage(beverage));
            }
        }
    }
    Ok(())
}

pub async fn show(target: &StoreTarget, id: &str) -> Result<()> {
    let mut store = open_store(target).await?;
    if store.show_beverage(id).is_none() {
        info!(%id, "beverage not found, selections unchanged");
        println!("no beverage with id {id}");
    }
    print!("{}", format_selection(&store));
    Ok(())
}

fn format_beverage(beverage: &Beverage) -> String {
    format!(
        "{}  {}  {}",
        beverage.id.as_deref().unwrap_or("-"),
        beverage.created_at.format("%Y-%m-%d %H:%M:%S"),
        beverage.describe()
    )
}

fn format_selection<D>(store: &BeverageStore<D>) -> String {
    let mut out = format!("selected: {}\n", store.selected_beverage_id());
    for category in OptionCategory::ALL {
        let current = store
            .current(category)
            .map(|item| format!("{} ({})", item.name, item.id))
            .unwrap_or_else(|| "none".to_string());
        out.push_str(&format!("{:<8} {current}\n", category.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::target_in;

    #[tokio::test]
    async fn make_applies_picks_before_saving() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&target_in(dir.path())).await.unwrap();
        let picks = Picks {
            base: Some("b3".to_string()),
            syrup: Some("s3".to_string()),
            ..Picks::default()
        };

        let made = make_with(&mut store, &picks).await.unwrap().unwrap();
        assert_eq!(made.describe(), "Coffee + No Cream + Caramel");
    }

    #[tokio::test]
    async fn make_rejects_unknown_pick() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&target_in(dir.path())).await.unwrap();
        let picks = Picks {
            creamer: Some("c9".to_string()),
            ..Picks::default()
        };

        assert!(make_with(&mut store, &picks).await.is_err());
        assert!(store.beverages().is_empty());
    }

    #[tokio::test]
    async fn saved_beverage_is_visible_to_next_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let target = target_in(dir.path());
        let made = {
            let mut store = open_store(&target).await.unwrap();
            let picks = Picks {
                creamer: Some("c2".to_string()),
                ..Picks::default()
            };
            make_with(&mut store, &picks).await.unwrap().unwrap()
        };

        let mut store = open_store(&target).await.unwrap();
        let id = made.id.clone().unwrap();
        store.show_beverage(&id);

        let text = format_selection(&store);
        assert!(text.contains(&format!("selected: {id}")));
        assert!(text.contains("creamer  Milk (c2)"));
        assert!(format_beverage(&made).starts_with(&id));
    }
}
