use crate::model::{Link, MonthlyClickRow};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgQueryResult;
use sqlx::{Error, PgPool};

pub async fn save_link(
    pool: &PgPool,
    original_url: &str,
    short_code: &str,
    created_at: DateTime<Utc>,
) -> Result<Link, Error> {
    sqlx::query_as(
        r#"
          insert into links(original_url, short_code, created_at)
          values ($1, $2, $3)
          returning id, original_url, short_code, created_at
        "#,
    )
    .bind(original_url)
    .bind(short_code)
    .bind(created_at)
    .fetch_one(pool)
    .await
}

pub async fn find_by_original_url(pool: &PgPool, original_url: &str) -> Result<Option<Link>, Error> {
    sqlx::query_as(
        "select id, original_url, short_code, created_at from links where original_url = $1",
    )
    .bind(original_url)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_short_code(pool: &PgPool, short_code: &str) -> Result<Option<Link>, Error> {
    sqlx::query_as(
        "select id, original_url, short_code, created_at from links where short_code = $1",
    )
    .bind(short_code)
    .fetch_optional(pool)
    .await
}

pub async fn save_click(
    pool: &PgPool,
    link_id: i64,
    clicked_at: DateTime<Utc>,
    is_valid: bool,
    earnings: f64,
) -> Result<PgQueryResult, Error> {
    sqlx::query(
        r#"
          insert into clicks(link_id, clicked_at, is_valid, earnings)
          values ($1, $2, $3, $4)
        "#,
    )
    .bind(link_id)
    .bind(clicked_at)
    .bind(is_valid)
    .bind(earnings)
    .execute(pool)
    .await
}

/// One page of links in insertion order, so paging is deterministic for
/// unchanged data.
pub async fn links_page(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Link>, Error> {
    sqlx::query_as(
        r#"
          select id, original_url, short_code, created_at
          from links
          order by id
          limit $1 offset $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Clicks for the given links, bucketed by calendar month. Months without
/// clicks produce no rows.
pub async fn monthly_clicks(pool: &PgPool, link_ids: &[i64]) -> Result<Vec<MonthlyClickRow>, Error> {
    sqlx::query_as(
        r#"
          select link_id, date_trunc('month', clicked_at) as month,
                 count(*) as clicks, coalesce(sum(earnings), 0) as earnings
          from clicks
          where link_id = any($1)
          group by link_id, month
          order by link_id, month
        "#,
    )
    .bind(link_ids)
    .fetch_all(pool)
    .await
}
