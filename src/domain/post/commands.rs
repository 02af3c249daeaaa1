use serde::{Deserialize, Serialize};

use crate::domain::post::entity::Category;
use crate::services::response::ServiceError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePost {
	pub title: String,
	pub content: String,
	#[serde(default)]
	pub category: Category,
}

impl CreatePost {
	pub fn validate(&self) -> Result<(), ServiceError> {
		require_filled("title", &self.title)?;
		require_filled("content", &self.content)
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdatePost {
	pub title: String,
	pub content: String,
	#[serde(default)]
	pub category: Category,
}

impl UpdatePost {
	pub fn validate(&self) -> Result<(), ServiceError> {
		require_filled("title", &self.title)?;
		require_filled("content", &self.content)
	}
}

/// The only submission-time invariant the board enforces.
pub(crate) fn require_filled(
	field: &'static str,
	value: &str,
) -> Result<(), ServiceError> {
	if value.trim().is_empty() {
		return Err(ServiceError::EmptyField { field });
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::domain::post::entity::Category;

	#[test]
	fn test_blank_title_is_rejected() {
		let command = CreatePost {
			title: "  ".to_string(),
			content: "body".to_string(),
			category: Category::Free,
		};

		assert!(matches!(command.validate(), Err(ServiceError::EmptyField { field: "title" })));
	}

	#[test]
	fn test_blank_content_is_rejected() {
		let command = UpdatePost {
			title: "hello".to_string(),
			content: "".to_string(),
			category: Category::Secret,
		};

		assert!(matches!(command.validate(), Err(ServiceError::EmptyField { field: "content" })));
	}

	#[test]
	fn test_filled_submission_passes() {
		let command = CreatePost {
			title: "hello".to_string(),
			content: "body".to_string(),
			category: Category::Free,
		};

		assert!(command.validate().is_ok());
	}

	#[test]
	fn test_category_defaults_to_free() {
		let command: CreatePost = serde_json::from_str(r#"{"title":"t","content":"c"}"#).unwrap();

		assert_eq!(command.category, Category::Free);
	}
}
