use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal: Option<String>,
    pub country: Option<String>,
    pub institution: Option<String>,
    pub student_id: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}
