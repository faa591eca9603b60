//! Wire types for the optional `POST /search` endpoint: a free-text
//! lookup of comparable titles with a revenue-range summary.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_N: u32 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_n: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(default)]
    pub top_results: Vec<MovieMatch>,
    /// Revenue statistics over the matches, in millions of dollars.
    #[serde(default)]
    pub revenue_millions: Option<RevenueStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieMatch {
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RevenueStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}
