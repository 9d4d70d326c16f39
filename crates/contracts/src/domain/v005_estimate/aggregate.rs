use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Шапка заявки на расчёт. Название проекта обязательно при сохранении.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateHeader {
    #[serde(rename = "estimateId")]
    pub estimate_id: Uuid,

    #[serde(rename = "projectName", default)]
    pub project_name: String,

    #[serde(rename = "customerName", default)]
    pub customer_name: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl EstimateHeader {
    pub fn new(project_name: String, customer_name: String) -> Self {
        let now = Utc::now();
        Self {
            estimate_id: Uuid::new_v4(),
            project_name,
            customer_name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.project_name.trim().is_empty() {
            return Err("Название проекта обязательно для заполнения".into());
        }
        Ok(())
    }
}

impl Default for EstimateHeader {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}
