use axum::extract::ws::{Message, WebSocket};
use futures::{
	stream::{SplitSink, SplitStream},
	SinkExt, StreamExt,
};
use tokio::{sync::broadcast, task::JoinHandle};

use crate::adapters::repositories::SnapshotSource;
use crate::domain::board::{BoardStateWrapper, Listeners};
use crate::domain::post::events::BoardEvent;
use crate::services::board::BoardService;
use crate::services::response::ServiceError;

pub struct EventHandler;
impl EventHandler {
	/// This function deals with a single websocket subscriber: board
	/// events are forwarded as text frames until the client hangs up or
	/// stops reading.
	pub async fn run_socket_broker(
		stream: WebSocket,
		state: BoardStateWrapper,
	) {
		let (sender, receiver) = stream.split();
		let listeners = state.read().await.listeners.clone();

		let mut send_task = EventHandler::_forward_events_to_subscriber(listeners, sender);
		let mut recv_task = EventHandler::_await_subscriber_close(receiver);

		// Waits on multiple concurrent branches, returning when the first branch completes,
		// cancelling the remaining branches.
		tokio::select! {
			_ = (&mut send_task) => recv_task.abort(),
			_ = (&mut recv_task) => send_task.abort(),
		};
	}

	pub fn publish(
		listeners: &Listeners,
		event: &BoardEvent,
	) -> Result<(), ServiceError> {
		let frame = event.to_frame()?;

		// a send error only means nobody is subscribed right now
		let _ = listeners.send(frame);
		Ok(())
	}

	fn _forward_events_to_subscriber(
		listeners: Listeners,
		mut sender: SplitSink<WebSocket, Message>,
	) -> JoinHandle<()> {
		tokio::spawn(async move {
			let mut events = listeners.subscribe();
			while let Ok(frame) = events.recv().await {
				if sender.send(Message::Text(frame)).await.is_err() {
					break;
				}
			}
		})
	}

	fn _await_subscriber_close(mut receiver: SplitStream<WebSocket>) -> JoinHandle<()> {
		tokio::spawn(async move {
			// subscribers only listen; anything but a close frame is dropped
			while let Some(Ok(message)) = receiver.next().await {
				if let Message::Close(_) = message {
					break;
				}
			}
		})
	}

	/// Change notifications carry no payload worth merging; every one
	/// of them triggers a full snapshot refetch, eventually. Subscribes
	/// before returning so no notification published afterwards is lost.
	pub async fn run_snapshot_refresher(
		state: BoardStateWrapper,
		source: impl SnapshotSource + Send + Sync + 'static,
	) -> JoinHandle<()> {
		let mut events = state.read().await.listeners.subscribe();
		tokio::spawn(async move {
			loop {
				match events.recv().await {
					Ok(_) => {
						if let Err(err) = BoardService::refresh_snapshot(state.clone(), &source).await {
							tracing::warn!("snapshot refetch failed: {err}");
						}
					}
					Err(broadcast::error::RecvError::Lagged(skipped)) => {
						tracing::warn!("event channel lagged, {skipped} notifications collapsed");
					}
					Err(broadcast::error::RecvError::Closed) => break,
				}
			}
		})
	}
}

#[cfg(test)]
mod test {
	use async_trait::async_trait;

	use super::*;
	use crate::domain::board::BoardState;
	use crate::domain::post::entity::{Category, Post};

	#[tokio::test]
	async fn test_published_event_reaches_every_subscriber() {
		let state: BoardStateWrapper = BoardState::new(Vec::new()).into();
		let listeners = state.read().await.listeners.clone();
		let mut first = listeners.subscribe();
		let mut second = listeners.subscribe();

		EventHandler::publish(
			&listeners,
			&BoardEvent::PostCreated {
				id: 8,
				category: Category::Secret,
				title: "psst".to_string(),
			},
		)
		.unwrap();

		for subscriber in [&mut first, &mut second] {
			let frame = subscriber.recv().await.unwrap();
			assert!(frame.contains("PostCreated"));
			assert!(frame.contains("psst"));
		}
	}

	#[tokio::test]
	async fn test_publishing_without_subscribers_is_fine() {
		let state: BoardStateWrapper = BoardState::new(Vec::new()).into();
		let listeners = state.read().await.listeners.clone();

		EventHandler::publish(
			&listeners,
			&BoardEvent::PostCreated {
				id: 1,
				category: Category::Free,
				title: "nobody listens".to_string(),
			},
		)
		.unwrap();
	}

	struct OnePostSource;

	#[async_trait]
	impl SnapshotSource for OnePostSource {
		async fn fetch_all(&self) -> Result<Vec<Post>, ServiceError> {
			Ok(vec![Post {
				id: 1,
				title: "fresh".to_string(),
				content: "refetched".to_string(),
				category: Category::Free,
				created_at: chrono::Utc::now(),
				likes: 0,
			}])
		}
	}

	#[tokio::test]
	async fn test_insert_notification_triggers_a_refetch() {
		let state: BoardStateWrapper = BoardState::new(Vec::new()).into();
		let refresher = EventHandler::run_snapshot_refresher(state.clone(), OnePostSource).await;

		let listeners = state.read().await.listeners.clone();
		EventHandler::publish(
			&listeners,
			&BoardEvent::PostCreated {
				id: 1,
				category: Category::Free,
				title: "fresh".to_string(),
			},
		)
		.unwrap();

		// eventually refetched, no stronger guarantee than that
		for _ in 0..50 {
			if !state.read().await.posts.is_empty() {
				break;
			}
			tokio::time::sleep(std::time::Duration::from_millis(10)).await;
		}
		assert_eq!(state.read().await.posts[0].title, "fresh");

		refresher.abort();
	}
}
