use axum::Json;
use serde_json::{json, Value};

pub async fn index() -> Json<Value> {
	Json(json!({ "service": "board", "status": "ok" }))
}

#[cfg(test)]
mod test {
	use axum::body::Body;
	use axum::http::{Request, StatusCode};
	use axum::routing::get;
	use axum::Router;
	use tower::ServiceExt;

	use super::index;

	#[tokio::test]
	async fn test_index_answers() {
		let app = Router::new().route("/", get(index));

		let response = app
			.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);
	}
}
