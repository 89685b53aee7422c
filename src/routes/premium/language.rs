use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::Translator;
use actix_web::{post, web, Responder, Result};
use serde_json::json;
use serde_valid::Validate;
use sqlx::PgPool;

/// POST /multi-language
/// Premium stub: runs the business context through the phrase-table
/// translator to demonstrate the feature.
#[tracing::instrument(name = "Enable multi-language support.", skip(translator))]
#[post("/multi-language")]
pub async fn enable(
    form: web::Json<forms::MultiLanguage>,
    pg_pool: web::Data<PgPool>,
    translator: web::Data<Translator>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().form_error(errors));
    }
    let form = form.into_inner();

    if !translator.supports(&form.language) {
        return Err(JsonResponse::<serde_json::Value>::build()
            .bad_request(format!("Unsupported language {}", form.language)));
    }

    let business = db::business::fetch(pg_pool.get_ref(), &form.business_id)
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Business>::build().not_found("Business not found"))?;

    let translated = translator
        .translate(&business.context, &form.language)
        .unwrap_or_else(|| business.context.clone());

    Ok(web::Json(json!({
        "status": "success",
        "message": format!("Multi-language support enabled for {}", form.language),
        "translated_context": translated,
        "business_id": form.business_id,
    })))
}
