use anyhow::Context;
use sea_orm::Set;
use serde::Deserialize;

use crate::{entities::title, error::AppResult, store::TitleStore};

const DATASET: &str = include_str!("../data/netflix-titles.json");

/// One record of the bundled dataset. `id` is absent on purpose; the store
/// assigns keys on insert.
#[derive(Debug, Deserialize)]
pub struct SeedTitle {
    pub show_id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub listed_in: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub fn dataset() -> anyhow::Result<Vec<SeedTitle>> {
    serde_json::from_str(DATASET).context("bundled dataset")
}

/// Destructive reseed: drops every stored title and reloads the bundled
/// dataset. Invoked at startup only when `RESET_DB` is set.
pub async fn reseed(store: &TitleStore) -> AppResult<usize> {
    let records = dataset()?;
    tracing::info!(records = records.len(), "resetting and seeding title collection");

    let inserted =
        store.reseed(records.into_iter().map(to_active_model).collect()).await?;
    tracing::info!(inserted, "seeding completed");
    Ok(inserted)
}

fn to_active_model(record: SeedTitle) -> title::ActiveModel {
    title::ActiveModel {
        id: Default::default(),
        show_id: Set(record.show_id),
        title: Set(record.title),
        kind: Set(record.kind),
        director: Set(record.director),
        cast: Set(record.cast),
        country: Set(record.country),
        date_added: Set(record.date_added),
        release_year: Set(record.release_year),
        rating: Set(record.rating),
        duration: Set(record.duration),
        listed_in: Set(record.listed_in),
        description: Set(record.description),
    }
}
