pub mod listing;

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::post::entity::Post;

/// In-memory copy of the posts table plus the channel insert events are
/// fanned out on. The visible list is always derived from this
/// snapshot, never from the store directly.
pub struct BoardState {
	pub posts: Vec<Post>,
	pub listeners: Listeners,
}

impl BoardState {
	pub fn new(posts: Vec<Post>) -> Self {
		let (tx, _rx) = broadcast::channel(100);
		Self {
			posts,
			listeners: tx.into(),
		}
	}
}

impl Deref for BoardState {
	type Target = Vec<Post>;
	fn deref(&self) -> &Self::Target {
		&self.posts
	}
}
impl DerefMut for BoardState {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.posts
	}
}

#[derive(Clone)]
pub struct BoardStateWrapper(pub Arc<RwLock<BoardState>>);
impl From<Arc<RwLock<BoardState>>> for BoardStateWrapper {
	fn from(value: Arc<RwLock<BoardState>>) -> Self {
		Self(value)
	}
}
impl From<BoardState> for BoardStateWrapper {
	fn from(value: BoardState) -> Self {
		Arc::new(RwLock::new(value)).into()
	}
}
impl BoardStateWrapper {
	pub(crate) async fn read(&self) -> RwLockReadGuard<'_, BoardState> {
		self.0.read().await
	}
	pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
		self.0.write().await
	}
}

#[derive(Clone)]
pub struct Listeners(pub(crate) broadcast::Sender<String>);
impl From<broadcast::Sender<String>> for Listeners {
	fn from(value: broadcast::Sender<String>) -> Self {
		Self(value)
	}
}
impl Deref for Listeners {
	type Target = broadcast::Sender<String>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
