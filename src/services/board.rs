use crate::adapters::repositories::{CommentStore, LikeStore, SnapshotSource};
use crate::domain::board::BoardStateWrapper;
use crate::domain::comment::entity::Comment;
use crate::services::response::ServiceError;

pub struct BoardService;

impl BoardService {
	/// Full refetch of the posts snapshot. There is no incremental
	/// path; a change notification or a list read always reloads the
	/// whole table copy.
	pub async fn refresh_snapshot(
		state: BoardStateWrapper,
		source: &impl SnapshotSource,
	) -> Result<(), ServiceError> {
		let posts = source.fetch_all().await?;
		state.write().await.posts = posts;
		Ok(())
	}

	/// Bumps the counter in the snapshot first, then writes the bumped
	/// value through. A failed write puts the counter back; a slow
	/// concurrent liker simply overwrites, last response wins.
	pub async fn like_post(
		state: BoardStateWrapper,
		store: &(impl LikeStore + SnapshotSource),
		post_id: i64,
	) -> Result<i64, ServiceError> {
		if !state.read().await.posts.iter().any(|post| post.id == post_id) {
			Self::refresh_snapshot(state.clone(), store).await?;
		}

		let bumped = {
			let mut board = state.write().await;
			let post = board
				.posts
				.iter_mut()
				.find(|post| post.id == post_id)
				.ok_or(ServiceError::PostNotFound)?;
			post.likes += 1;
			post.likes
		};

		if let Err(err) = store.set_likes(post_id, bumped).await {
			let mut board = state.write().await;
			if let Some(post) = board.posts.iter_mut().find(|post| post.id == post_id) {
				post.likes -= 1;
			}
			return Err(err);
		}

		Ok(bumped)
	}

	/// Appends the tentative record right away, then reconciles: the
	/// confirmed row takes its place on success, a failed insert takes
	/// it out again.
	pub async fn submit_comment(
		comments: &mut Vec<Comment>,
		store: &impl CommentStore,
		tentative: Comment,
	) -> Result<Comment, ServiceError> {
		let tentative_id = tentative.id;
		comments.push(tentative.clone());

		match store.add(&tentative).await {
			Ok(confirmed) => {
				if let Some(slot) = comments.iter_mut().find(|comment| comment.id == tentative_id) {
					*slot = confirmed.clone();
				}
				Ok(confirmed)
			}
			Err(err) => {
				comments.retain(|comment| comment.id != tentative_id);
				Err(err)
			}
		}
	}
}

#[cfg(test)]
mod test {
	use std::sync::Mutex;

	use async_trait::async_trait;
	use chrono::Utc;
	use rand::Rng;
	use uuid::Uuid;

	use super::*;
	use crate::adapters::repositories::{CommentStore, LikeStore, SnapshotSource};
	use crate::domain::board::BoardState;
	use crate::domain::post::entity::{Category, Post};

	fn post(
		id: i64,
		likes: i64,
	) -> Post {
		Post {
			id,
			title: "hello".to_string(),
			content: "board".to_string(),
			category: Category::Free,
			created_at: Utc::now(),
			likes,
		}
	}

	/// Store fake that records like writes, or refuses everything.
	struct FakeStore {
		snapshot: Vec<Post>,
		written: Mutex<Vec<(i64, i64)>>,
		failing: bool,
	}

	impl FakeStore {
		fn holding(snapshot: Vec<Post>) -> Self {
			Self {
				snapshot,
				written: Mutex::new(Vec::new()),
				failing: false,
			}
		}
		fn failing() -> Self {
			Self {
				snapshot: Vec::new(),
				written: Mutex::new(Vec::new()),
				failing: true,
			}
		}
	}

	#[async_trait]
	impl SnapshotSource for FakeStore {
		async fn fetch_all(&self) -> Result<Vec<Post>, ServiceError> {
			if self.failing {
				return Err(ServiceError::StoreUnavailable(sqlx::Error::PoolClosed));
			}
			Ok(self.snapshot.clone())
		}
	}

	#[async_trait]
	impl LikeStore for FakeStore {
		async fn set_likes(
			&self,
			post_id: i64,
			likes: i64,
		) -> Result<(), ServiceError> {
			if self.failing {
				return Err(ServiceError::StoreUnavailable(sqlx::Error::PoolClosed));
			}
			self.written.lock().unwrap().push((post_id, likes));
			Ok(())
		}
	}

	struct FakeComments {
		failing: bool,
	}

	#[async_trait]
	impl CommentStore for FakeComments {
		async fn add(
			&self,
			tentative: &Comment,
		) -> Result<Comment, ServiceError> {
			if self.failing {
				return Err(ServiceError::StoreUnavailable(sqlx::Error::PoolClosed));
			}
			// confirmed rows come back with their own id and clock
			Ok(Comment {
				id: Uuid::new_v4(),
				created_at: Utc::now(),
				..tentative.clone()
			})
		}
	}

	#[tokio::test]
	async fn test_like_writes_the_absolute_bumped_value() {
		let post_id = rand::thread_rng().gen_range(1..1_000_000);
		let state: BoardStateWrapper = BoardState::new(vec![post(post_id, 41)]).into();
		let store = FakeStore::holding(Vec::new());

		let likes = BoardService::like_post(state.clone(), &store, post_id).await.unwrap();

		assert_eq!(likes, 42);
		assert_eq!(state.read().await.posts[0].likes, 42);
		assert_eq!(*store.written.lock().unwrap(), vec![(post_id, 42)]);
	}

	#[tokio::test]
	async fn test_failed_like_write_reverts_the_counter() {
		let state: BoardStateWrapper = BoardState::new(vec![post(7, 3)]).into();
		let store = FakeStore::failing();

		let result = BoardService::like_post(state.clone(), &store, 7).await;

		assert!(matches!(result, Err(ServiceError::StoreUnavailable(_))));
		assert_eq!(state.read().await.posts[0].likes, 3);
	}

	#[tokio::test]
	async fn test_like_refetches_a_cold_snapshot() {
		let state: BoardStateWrapper = BoardState::new(Vec::new()).into();
		let store = FakeStore::holding(vec![post(7, 0)]);

		let likes = BoardService::like_post(state.clone(), &store, 7).await.unwrap();

		assert_eq!(likes, 1);
	}

	#[tokio::test]
	async fn test_unknown_post_cannot_be_liked() {
		let state: BoardStateWrapper = BoardState::new(Vec::new()).into();
		let store = FakeStore::holding(Vec::new());

		let result = BoardService::like_post(state, &store, 99).await;

		assert!(matches!(result, Err(ServiceError::PostNotFound)));
	}

	#[tokio::test]
	async fn test_confirmed_comment_replaces_the_tentative_one() {
		let mut thread = Vec::new();
		let tentative = Comment::tentative(1, None, "first!");
		let tentative_id = tentative.id;

		let confirmed = BoardService::submit_comment(&mut thread, &FakeComments { failing: false }, tentative)
			.await
			.unwrap();

		assert_eq!(thread.len(), 1);
		assert_eq!(thread[0], confirmed);
		assert_ne!(thread[0].id, tentative_id);
	}

	#[tokio::test]
	async fn test_failed_comment_insert_removes_the_tentative_one() {
		let mut thread = vec![Comment::tentative(1, None, "older comment")];

		let result =
			BoardService::submit_comment(&mut thread, &FakeComments { failing: true }, Comment::tentative(1, None, "first!"))
				.await;

		assert!(result.is_err());
		assert_eq!(thread.len(), 1);
		assert_eq!(thread[0].content, "older comment");
	}

	#[tokio::test]
	async fn test_failed_refetch_keeps_the_snapshot() {
		let state: BoardStateWrapper = BoardState::new(vec![post(1, 0)]).into();

		let result = BoardService::refresh_snapshot(state.clone(), &FakeStore::failing()).await;

		assert!(result.is_err());
		assert_eq!(state.read().await.posts.len(), 1);
	}
}
