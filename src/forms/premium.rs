use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct WhatsappIntegration {
    #[validate(min_length = 1)]
    pub business_id: String,
    #[validate(min_length = 1)]
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct EmailAutomation {
    #[validate(min_length = 1)]
    pub business_id: String,
    #[validate(min_length = 3)]
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct MultiLanguage {
    #[validate(min_length = 1)]
    pub business_id: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "es".to_string()
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct CustomTraining {
    #[validate(min_length = 1)]
    pub business_id: String,
    pub training_data: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct CreateSubscription {
    #[validate(min_length = 1)]
    pub business_id: String,
    #[serde(default = "default_plan")]
    pub plan: String,
}

fn default_plan() -> String {
    "monthly".to_string()
}
