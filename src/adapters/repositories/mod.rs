pub mod comment_repository;
pub mod post_repository;
pub mod user_repository;

use async_trait::async_trait;

use crate::domain::comment::entity::Comment;
use crate::domain::post::entity::Post;
use crate::services::response::ServiceError;

/// Seams the optimistic service logic writes through. Concrete
/// repositories implement them against the store; tests substitute
/// failing fakes to exercise the revert paths.
#[async_trait]
pub trait SnapshotSource {
	async fn fetch_all(&self) -> Result<Vec<Post>, ServiceError>;
}

#[async_trait]
pub trait LikeStore {
	/// Stores the absolute counter value. Concurrent likers race and
	/// the last write wins.
	async fn set_likes(
		&self,
		post_id: i64,
		likes: i64,
	) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait CommentStore {
	async fn add(
		&self,
		tentative: &Comment,
	) -> Result<Comment, ServiceError>;
}
