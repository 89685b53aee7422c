use crate::models;
use crate::models::MessageRole;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn append(
    pool: &PgPool,
    conversation_id: &str,
    message: &str,
    role: MessageRole,
    business_id: &str,
) -> Result<models::ConversationMessage, String> {
    let query_span = tracing::info_span!("Append conversation message.");
    sqlx::query_as::<_, models::ConversationMessage>(
        r#"
        INSERT INTO conversation_messages (conversation_id, message, role, business_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, conversation_id, message, role, business_id, created_at
        "#,
    )
    .bind(conversation_id)
    .bind(message)
    .bind(role)
    .bind(business_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!(
            "Failed to append {} message to conversation {}, error: {:?}",
            role,
            conversation_id,
            err
        );
        "Could not write conversation log".to_string()
    })
}

pub async fn fetch_by_conversation(
    pool: &PgPool,
    conversation_id: &str,
) -> Result<Vec<models::ConversationMessage>, String> {
    let query_span = tracing::info_span!("Fetch conversation messages.");
    sqlx::query_as::<_, models::ConversationMessage>(
        r#"
        SELECT
            id, conversation_id, message, role, business_id, created_at
        FROM conversation_messages
        WHERE conversation_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(conversation_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch conversation, error: {:?}", err);
        "Could not fetch conversation".to_string()
    })
}
