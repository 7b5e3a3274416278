use crate::{models::DbTimeSlot, repositories::INSERT_CHUNK};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Inserts one slot per timestamp, skipping timestamps the event already has.
pub async fn create_time_slots(
    pool: &Pool<Postgres>,
    event_id: Uuid,
    slot_times: &[DateTime<Utc>],
) -> Result<Vec<DbTimeSlot>> {
    let mut created = Vec::with_capacity(slot_times.len());

    for chunk in slot_times.chunks(INSERT_CHUNK) {
        let mut builder =
            QueryBuilder::<Postgres>::new("INSERT INTO time_slots (id, event_id, slot_time) ");
        builder.push_values(chunk, |mut row, slot_time| {
            row.push_bind(Uuid::new_v4())
                .push_bind(event_id)
                .push_bind(*slot_time);
        });
        builder.push(
            " ON CONFLICT (event_id, slot_time) DO NOTHING RETURNING id, event_id, slot_time",
        );

        let rows = builder
            .build_query_as::<DbTimeSlot>()
            .fetch_all(pool)
            .await?;
        created.extend(rows);
    }

    created.sort_by_key(|slot| slot.slot_time);
    Ok(created)
}

pub async fn get_time_slots_by_event_id(
    pool: &Pool<Postgres>,
    event_id: Uuid,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, event_id, slot_time
        FROM time_slots
        WHERE event_id = $1
        ORDER BY slot_time ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}
