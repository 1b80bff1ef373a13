use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct LinkSpecification {
    pub original_url: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MonthlyEarnings {
    pub month: String,
    pub earnings: f64,
}

#[derive(Debug, Serialize)]
pub struct LinkStats {
    pub url: String,
    pub total_clicks: i64,
    pub total_earnings: f64,
    pub monthly_breakdown: Vec<MonthlyEarnings>,
}

/// One month bucket of clicks for a single link, as produced by the grouped
/// aggregation query. `month` is the first instant of the bucket's month.
#[derive(Debug, FromRow)]
pub struct MonthlyClickRow {
    pub link_id: i64,
    pub month: DateTime<Utc>,
    pub clicks: i64,
    pub earnings: f64,
}
