use crate::{models::DbResponse, repositories::INSERT_CHUNK};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;
use whenmeet_core::models::response::SlotAvailability;

pub async fn get_responses_by_event_id(
    pool: &Pool<Postgres>,
    event_id: Uuid,
) -> Result<Vec<DbResponse>> {
    let responses = sqlx::query_as::<_, DbResponse>(
        r#"
        SELECT id, event_id, time_slot_id, participant_name, is_available, created_at
        FROM responses
        WHERE event_id = $1
        "#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(responses)
}

/// Swaps a participant's rows for `availability` inside one transaction.
pub async fn replace_participant_responses(
    pool: &Pool<Postgres>,
    event_id: Uuid,
    participant_name: &str,
    availability: &[SlotAvailability],
) -> Result<()> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(
        r#"
        DELETE FROM responses
        WHERE event_id = $1 AND participant_name = $2
        "#,
    )
    .bind(event_id)
    .bind(participant_name)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    for chunk in availability.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO responses (id, event_id, time_slot_id, participant_name, is_available, created_at) ",
        );
        builder.push_values(chunk, |mut row, slot| {
            row.push_bind(Uuid::new_v4())
                .push_bind(event_id)
                .push_bind(slot.time_slot_id)
                .push_bind(participant_name)
                .push_bind(slot.is_available)
                .push_bind(now);
        });
        builder.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;

    tracing::debug!(
        "Replaced responses of '{}' for event {}: {} deleted, {} inserted",
        participant_name,
        event_id,
        deleted,
        availability.len()
    );
    Ok(())
}
