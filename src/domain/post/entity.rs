use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub content: String,
	pub category: Category,
	pub created_at: DateTime<Utc>,
	pub likes: i64,
}

/// Board a post belongs to. The set is closed; unknown tags are rejected
/// at the store boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
	#[default]
	Free,
	Secret,
}

#[cfg(test)]
mod test {
	use super::Category;

	#[test]
	fn test_category_representation() {
		assert_eq!(serde_json::to_string(&Category::Free).unwrap(), r#""free""#);
		assert_eq!(serde_json::from_str::<Category>(r#""secret""#).unwrap(), Category::Secret);
		assert!(serde_json::from_str::<Category>(r#""notice""#).is_err());
	}
}
