use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

/// GET /chat/history/{conversation_id}
/// Returns the logged messages of a conversation, oldest first.
#[tracing::instrument(name = "Get chat history.")]
#[get("/history/{conversation_id}")]
pub async fn history(
    path: web::Path<String>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let conversation_id = path.into_inner();

    db::conversation::fetch_by_conversation(pg_pool.get_ref(), &conversation_id)
        .await
        .map(|messages| {
            JsonResponse::<models::ConversationMessage>::build()
                .set_list(messages)
                .ok("OK")
        })
        .map_err(|err| {
            JsonResponse::<models::ConversationMessage>::build().internal_server_error(err)
        })
}
