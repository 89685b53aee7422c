use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_json::json;
use serde_valid::Validate;
use sqlx::PgPool;

/// POST /custom-training
/// Premium stub: stores the training blob on the business row; no model
/// is trained with it.
#[tracing::instrument(name = "Store custom training data.")]
#[post("/custom-training")]
pub async fn add(
    form: web::Json<forms::CustomTraining>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().form_error(errors));
    }
    let form = form.into_inner();

    let training_samples = form
        .training_data
        .get("examples")
        .and_then(|examples| examples.as_array())
        .map(|examples| examples.len())
        .unwrap_or(0);

    db::business::update_training(pg_pool.get_ref(), &form.business_id, form.training_data)
        .await
        .map_err(|err| JsonResponse::<models::Business>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Business>::build().not_found("Business not found"))?;

    Ok(web::Json(json!({
        "status": "success",
        "message": "Custom AI training completed",
        "business_id": form.business_id,
        "training_samples": training_samples,
    })))
}
