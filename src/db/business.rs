use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<models::Business>, String> {
    let query_span = tracing::info_span!("Fetch business by id.");
    sqlx::query_as::<_, models::Business>(
        r#"
        SELECT
            id, context, custom_training, created_at
        FROM businesses
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        e => {
            tracing::error!("Failed to fetch business {}, error: {:?}", id, e);
            Err("Could not fetch business".to_string())
        }
    })
}

pub async fn update_training(
    pool: &PgPool,
    id: &str,
    training_data: serde_json::Value,
) -> Result<Option<models::Business>, String> {
    let query_span = tracing::info_span!("Store custom training data.");
    sqlx::query_as::<_, models::Business>(
        r#"
        UPDATE businesses
        SET custom_training = $2
        WHERE id = $1
        RETURNING id, context, custom_training, created_at
        "#,
    )
    .bind(id)
    .bind(training_data)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update training for {}, error: {:?}", id, err);
        "Could not store training data".to_string()
    })
}
