use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_json::json;
use serde_valid::Validate;

// declared order is also the upgrade order shown to customers
const PLANS: [(&str, u32); 3] = [("monthly", 99), ("quarterly", 249), ("annual", 899)];

/// POST /create-subscription
/// Premium stub: quotes a fixed price for the requested plan; no billing
/// happens here.
#[tracing::instrument(name = "Create subscription.")]
#[post("/create-subscription")]
pub async fn add(form: web::Json<forms::CreateSubscription>) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<serde_json::Value>::build().form_error(errors));
    }
    let form = form.into_inner();

    let price = PLANS
        .iter()
        .find(|(plan, _)| *plan == form.plan)
        .map(|(_, price)| *price)
        .ok_or_else(|| {
            JsonResponse::<serde_json::Value>::build()
                .bad_request(format!("Unknown plan {}", form.plan))
        })?;

    Ok(web::Json(json!({
        "status": "success",
        "plan": form.plan,
        "price": price,
        "business_id": form.business_id,
    })))
}
