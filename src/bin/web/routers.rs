use axum::{
	extract::{State, WebSocketUpgrade},
	response::IntoResponse,
	routing::get,
	Router,
};

use board::{domain::board::BoardStateWrapper, services::handlers::EventHandler};

/// Realtime subscription: every board insert is pushed to the client,
/// which is expected to refetch the list on notification.
async fn board_events_route(
	ws: WebSocketUpgrade,
	State(state): State<BoardStateWrapper>,
) -> impl IntoResponse {
	ws.on_upgrade(|socket| EventHandler::run_socket_broker(socket, state))
}

pub fn event_routers() -> Router<BoardStateWrapper> {
	Router::new().route("/events", get(board_events_route))
}
