use serde::{self, Deserialize, Serialize};

use crate::consts;
use crate::models::timestamp;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelList {
    pub models: Vec<String>,
    pub success: bool,
    pub timestamp: String,
}

impl ModelList {
    pub fn available() -> Self {
        Self {
            models: consts::AVAILABLE_MODELS
                .iter()
                .map(|model| model.to_string())
                .collect(),
            success: true,
            timestamp: timestamp(),
        }
    }
}
