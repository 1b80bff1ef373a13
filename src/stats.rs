use crate::errors::ApiError;
use crate::model::{Link, LinkStats, MonthlyClickRow, MonthlyEarnings};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Out-of-range values are rejected rather than clamped; a page past the end
/// of the data is not an error and simply yields an empty result.
pub fn validate_pagination(
    params: &PageParams,
    default_limit: i64,
    max_limit: i64,
) -> Result<Page, ApiError> {
    let page = params.page.unwrap_or(1);
    if page < 1 {
        return Err(ApiError::InvalidPagination("page must be at least 1".into()));
    }
    let limit = params.limit.unwrap_or(default_limit);
    if limit < 1 || limit > max_limit {
        return Err(ApiError::InvalidPagination(format!(
            "limit must be between 1 and {}",
            max_limit
        )));
    }
    let offset = (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| ApiError::InvalidPagination("page is out of range".into()))?;
    Ok(Page { limit, offset })
}

pub fn format_month(month: &DateTime<Utc>) -> String {
    month.format("%m/%Y").to_string()
}

/// Joins one page of links with their month buckets. The buckets arrive
/// sorted chronologically from the aggregation query, so each breakdown
/// stays in that order. Links without clicks get zero totals and an empty
/// breakdown.
pub fn assemble_stats(links: Vec<Link>, rows: Vec<MonthlyClickRow>) -> Vec<LinkStats> {
    links
        .into_iter()
        .map(|link| {
            let mut total_clicks = 0;
            let mut total_earnings = 0.0;
            let mut monthly_breakdown = Vec::new();
            for row in rows.iter().filter(|row| row.link_id == link.id) {
                total_clicks += row.clicks;
                total_earnings += row.earnings;
                monthly_breakdown.push(MonthlyEarnings {
                    month: format_month(&row.month),
                    earnings: row.earnings,
                });
            }
            LinkStats {
                url: link.original_url,
                total_clicks,
                total_earnings,
                monthly_breakdown,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params(page: Option<i64>, limit: Option<i64>) -> PageParams {
        PageParams { page, limit }
    }

    fn link(id: i64, url: &str) -> Link {
        Link {
            id,
            original_url: url.into(),
            short_code: format!("code{:02}", id),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn bucket(link_id: i64, year: i32, month: u32, clicks: i64, earnings: f64) -> MonthlyClickRow {
        MonthlyClickRow {
            link_id,
            month: Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap(),
            clicks,
            earnings,
        }
    }

    #[test]
    fn defaults_are_page_one_limit_ten() {
        let page = validate_pagination(&params(None, None), 10, 100).unwrap();
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let page = validate_pagination(&params(Some(3), Some(5)), 10, 100).unwrap();
        assert_eq!(page.limit, 5);
        assert_eq!(page.offset, 10);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(validate_pagination(&params(Some(0), None), 10, 100).is_err());
        assert!(validate_pagination(&params(Some(-1), None), 10, 100).is_err());
        assert!(validate_pagination(&params(None, Some(0)), 10, 100).is_err());
        assert!(validate_pagination(&params(None, Some(200)), 10, 100).is_err());
        assert!(validate_pagination(&params(Some(i64::MAX), Some(100)), 10, 100).is_err());
    }

    #[test]
    fn limit_at_the_maximum_is_accepted() {
        let page = validate_pagination(&params(None, Some(100)), 10, 100).unwrap();
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn months_render_as_mm_slash_yyyy() {
        let january = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_month(&january), "01/2026");
        let december = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(format_month(&december), "12/2025");
    }

    #[test]
    fn buckets_are_attached_to_their_link() {
        let links = vec![
            link(1, "https://www.fiverr.com/test/stats"),
            link(2, "https://www.fiverr.com/test/other"),
        ];
        let rows = vec![
            bucket(1, 2026, 1, 3, 0.10),
            bucket(1, 2026, 2, 2, 0.10),
            bucket(2, 2026, 2, 1, 0.05),
        ];
        let stats = assemble_stats(links, rows);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].url, "https://www.fiverr.com/test/stats");
        assert_eq!(stats[0].total_clicks, 5);
        assert!((stats[0].total_earnings - 0.20).abs() < 1e-9);
        assert_eq!(
            stats[0].monthly_breakdown,
            vec![
                MonthlyEarnings {
                    month: "01/2026".into(),
                    earnings: 0.10
                },
                MonthlyEarnings {
                    month: "02/2026".into(),
                    earnings: 0.10
                },
            ]
        );
        assert_eq!(stats[1].total_clicks, 1);
    }

    #[test]
    fn link_without_clicks_has_empty_breakdown_and_zero_totals() {
        let stats = assemble_stats(vec![link(7, "https://www.fiverr.com/quiet/gig")], vec![]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].total_clicks, 0);
        assert_eq!(stats[0].total_earnings, 0.0);
        assert!(stats[0].monthly_breakdown.is_empty());
    }

    #[test]
    fn breakdown_sums_to_total_earnings() {
        let rows = vec![
            bucket(1, 2025, 11, 4, 0.15),
            bucket(1, 2025, 12, 1, 0.05),
            bucket(1, 2026, 1, 2, 0.0),
        ];
        let stats = assemble_stats(vec![link(1, "https://www.fiverr.com/a/b")], rows);
        let breakdown_sum: f64 = stats[0]
            .monthly_breakdown
            .iter()
            .map(|bucket| bucket.earnings)
            .sum();
        assert!((breakdown_sum - stats[0].total_earnings).abs() < 1e-9);
    }
}
