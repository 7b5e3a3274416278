use crate::models::DbEvent;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_event(
    pool: &Pool<Postgres>,
    title: &str,
    description: Option<&str>,
) -> Result<DbEvent> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating event: id={}, title={}, has_description={}",
        id,
        title,
        description.is_some()
    );

    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        INSERT INTO events (id, title, description, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, description, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(event)
}

pub async fn get_event_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEvent>> {
    tracing::debug!("Getting event by id: {}", id);

    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, title, description, created_at
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if event.is_none() {
        tracing::debug!("Event not found: id={}", id);
    }

    Ok(event)
}

pub async fn list_events(pool: &Pool<Postgres>) -> Result<Vec<DbEvent>> {
    let events = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, title, description, created_at
        FROM events
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(events)
}
