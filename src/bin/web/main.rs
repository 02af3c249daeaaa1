pub mod routers;

use std::{net::SocketAddr, str::FromStr};

use axum::{
	http::{HeaderValue, Method},
	Router,
};

use board::{
	adapters::repositories::{post_repository::PostRepository, SnapshotSource},
	dependencies::{config, connection_pool},
	domain::board::{BoardState, BoardStateWrapper},
	services::handlers::EventHandler,
};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
	dotenv::dotenv().ok();

	// ! Tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config().log_level.as_str().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("connecting to the board store");
	let pool = connection_pool().await;
	sqlx::migrate!().run(pool).await.expect("board migrations must apply");

	// first snapshot; an unreachable store at boot starts the board empty
	let posts = PostRepository::new(pool).fetch_all().await.unwrap_or_else(|err| {
		tracing::warn!("initial board fetch failed, starting empty: {err}");
		Vec::new()
	});
	let board_state: BoardStateWrapper = BoardState::new(posts).into();

	let _snapshot_refresher = EventHandler::run_snapshot_refresher(board_state.clone(), PostRepository::new(pool)).await;

	let routers = Router::new()
		.merge(board::routes::create_routes())
		.merge(routers::event_routers())
		.with_state(board_state);

	let origins = config()
		.allow_origins
		.split(',')
		.map(|origin| origin.trim().parse::<HeaderValue>().expect("ALLOW_ORIGINS entries must be valid origins"))
		.collect::<Vec<_>>();

	let service_name = "/board";
	let app = Router::new()
		.nest_service(service_name, routers)
		.layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(origins))
				.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]),
		)
		.layer(TraceLayer::new_for_http());

	tracing::info!("starting board web server");
	axum::Server::bind(&SocketAddr::from_str(&config().server_ip_port).expect("SERVER_IP_PORT must be ip:port"))
		.serve(app.into_make_service())
		.await
		.expect("board web server stopped");
}
