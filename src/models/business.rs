use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business on whose behalf the bot answers. The `context` blob is
/// free text describing policies; it is owned by an external onboarding
/// flow and never mutated here (except the premium training column).
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Business {
    pub id: String,
    pub context: String,
    pub custom_training: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
