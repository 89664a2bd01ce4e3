//! Happiness choropleth: fetch the static dataset, shape it into
//! `(country, score)` rows and hand it to the chart widget.

use serde::Serialize;

use crate::net::types::{ApiError, HappinessDataset};
use crate::net::PortfolioApi;
use crate::render::{ChartSink, RenderError};

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("happiness dataset unavailable: {0}")]
    Fetch(#[from] ApiError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// One chart row. Serializes as `["Finland", 7.8]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryScore(pub String, pub f64);

impl CountryScore {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.1
    }
}

/// Turn dataset records into chart rows, skipping scores that are not
/// finite numbers.
#[must_use]
pub fn to_rows(dataset: &HappinessDataset) -> Vec<CountryScore> {
    dataset
        .data
        .iter()
        .filter_map(|record| match record.happiness_score.value() {
            Some(score) => Some(CountryScore(record.name.clone(), score)),
            None => {
                tracing::warn!(country = %record.name, score = ?record.happiness_score, "skipping unparseable happiness score");
                None
            }
        })
        .collect()
}

/// Fetch the dataset, wait for the chart library, then draw.
/// Returns the number of rows drawn.
///
/// # Errors
///
/// Returns [`ChartError`] if the fetch, the library load or the draw fails.
pub async fn render<A: PortfolioApi + ?Sized>(api: &A, chart: &dyn ChartSink) -> Result<usize, ChartError> {
    let (dataset, ready) = futures::join!(api.fetch_happiness(), chart.ready());
    let rows = to_rows(&dataset?);
    ready?;
    chart.draw(&rows)?;
    tracing::info!(rows = rows.len(), "happiness chart drawn");
    Ok(rows.len())
}

#[cfg(test)]
#[path = "happiness_test.rs"]
mod tests;
