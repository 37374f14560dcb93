//! ESPN injury table scraper.
//!
//! The injuries page carries one table per team. All of them are
//! concatenated into a single raw snapshot; headers are normalized to
//! uppercase so downstream ingestion can rely on the canonical column
//! names.

use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::data::{DataError, InjurySource, RawTable};

/// Default source page for the injury table.
pub const ESPN_INJURIES_URL: &str = "https://www.espn.com/nba/injuries";

/// Scraper for the ESPN NBA injuries page.
pub struct EspnScraper {
    url: String,
}

impl EspnScraper {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl InjurySource for EspnScraper {
    async fn fetch_raw_table(&self) -> Result<RawTable, DataError> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; Courtside/1.0)")
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Network(format!("HTTP {status}")));
        }

        let html = response
            .text()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        parse_tables(&html)
    }
}

/// Concatenate every table on the page into one raw snapshot.
fn parse_tables(html: &str) -> Result<RawTable, DataError> {
    let table_selector = selector("table")?;
    let header_selector = selector("thead th")?;
    let row_selector = selector("tbody tr")?;
    let cell_selector = selector("td")?;

    let document = Html::parse_document(html);
    let mut table = RawTable::default();

    for node in document.select(&table_selector) {
        let headers: Vec<String> = node
            .select(&header_selector)
            .map(|th| th.text().collect::<String>().trim().to_uppercase())
            .collect();
        if headers.is_empty() {
            continue;
        }

        for header in &headers {
            if !table.columns.contains(header) {
                table.columns.push(header.clone());
            }
        }

        for tr in node.select(&row_selector) {
            let cells: Vec<String> = tr
                .select(&cell_selector)
                .map(|td| td.text().collect::<String>().trim().to_string())
                .collect();
            if cells.is_empty() {
                continue;
            }
            let row = headers.iter().cloned().zip(cells).collect();
            table.rows.push(row);
        }
    }

    if table.columns.is_empty() {
        return Err(DataError::Fetch);
    }
    Ok(table)
}

fn selector(css: &str) -> Result<Selector, DataError> {
    Selector::parse(css).map_err(|e| DataError::Parse(e.to_string()))
}
