use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_json::json;
use serde_valid::Validate;

/// POST /email-automation
/// Premium stub: echoes the configuration back, nothing is sent.
#[tracing::instrument(name = "Enable email automation.")]
#[post("/email-automation")]
pub async fn enable(form: web::Json<forms::EmailAutomation>) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().form_error(errors));
    }
    let form = form.into_inner();

    Ok(web::Json(json!({
        "status": "success",
        "message": "Email automation configured",
        "business_id": form.business_id,
        "email": form.email,
    })))
}
