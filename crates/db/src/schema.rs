use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create events table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            slot_time TIMESTAMP WITH TIME ZONE NOT NULL,
            CONSTRAINT unique_event_slot UNIQUE (event_id, slot_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create responses table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS responses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            event_id UUID NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            time_slot_id UUID NOT NULL REFERENCES time_slots(id) ON DELETE CASCADE,
            participant_name VARCHAR(255) NOT NULL,
            is_available BOOLEAN NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_participant_slot UNIQUE (time_slot_id, participant_name)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; several statements, so this runs as a simple query
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_events_created_at ON events(created_at);
        CREATE INDEX IF NOT EXISTS idx_time_slots_event_id ON time_slots(event_id);
        CREATE INDEX IF NOT EXISTS idx_responses_event_id ON responses(event_id);
        CREATE INDEX IF NOT EXISTS idx_responses_event_participant ON responses(event_id, participant_name);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
