use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ChatRequest {
    #[validate(min_length = 1)]
    #[validate(max_length = 4000)]
    pub message: String,
    #[validate(min_length = 1)]
    pub business_id: String,
    // absent on the first turn of a session; the endpoint generates one
    pub conversation_id: Option<String>,
}
