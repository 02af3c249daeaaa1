use axum::headers::authorization::Bearer;
use axum::headers::Authorization;
use axum::TypedHeader;
use uuid::Uuid;

use crate::adapters::repositories::user_repository::UserRepository;

/// Resolves the optional bearer session to an author id that is known
/// to exist in the users table. Anything that goes wrong on the way
/// degrades to an anonymous comment, never to a failed request.
pub async fn resolve_author(
	repo: &UserRepository,
	bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Option<Uuid> {
	let TypedHeader(Authorization(bearer)) = bearer?;

	let user_id = match repo.session_user(bearer.token()).await {
		Ok(found) => found?,
		Err(err) => {
			tracing::warn!("session lookup failed, commenting anonymously: {err}");
			return None;
		}
	};

	match repo.exists(user_id).await {
		Ok(true) => Some(user_id),
		Ok(false) => {
			tracing::warn!("session user {user_id} not found in users table");
			None
		}
		Err(err) => {
			tracing::warn!("user lookup failed, commenting anonymously: {err}");
			None
		}
	}
}
