use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
	pub id: Uuid,
	pub post_id: i64,
	pub user_id: Option<Uuid>,
	pub content: String,
	pub created_at: DateTime<Utc>,
}

impl Comment {
	/// Record shown to the submitter before the store confirms the
	/// write. Id and timestamp are provisional; the confirmed row
	/// replaces them.
	pub fn tentative(
		post_id: i64,
		user_id: Option<Uuid>,
		content: &str,
	) -> Self {
		Self {
			id: Uuid::new_v4(),
			post_id,
			user_id,
			content: content.to_owned(),
			created_at: Utc::now(),
		}
	}
}
