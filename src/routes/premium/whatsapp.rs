use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_json::json;
use serde_valid::Validate;

/// POST /whatsapp-integration
/// Premium stub: acknowledges the request with a canned number, no
/// messaging channel is actually provisioned.
#[tracing::instrument(name = "Enable whatsapp integration.")]
#[post("/whatsapp-integration")]
pub async fn enable(form: web::Json<forms::WhatsappIntegration>) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().form_error(errors));
    }
    let form = form.into_inner();

    Ok(web::Json(json!({
        "status": "success",
        "message": "WhatsApp integration enabled",
        "whatsapp_number": "+1234567890",
        "business_id": form.business_id,
    })))
}
