use serde::{Deserialize, Serialize};

use crate::domain::post::commands::require_filled;
use crate::services::response::ServiceError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateComment {
	pub content: String,
}

impl CreateComment {
	pub fn validate(&self) -> Result<(), ServiceError> {
		require_filled("content", &self.content)
	}
}
