use sqlx::PgPool;
use uuid::Uuid;

use crate::services::response::ServiceError;

/// Read-only access to the auth side: session tokens and the users
/// table. Nothing here is ever written by the board.
pub struct UserRepository {
	pool: &'static PgPool,
}

impl UserRepository {
	pub fn new(pool: &'static PgPool) -> Self {
		Self { pool }
	}

	pub async fn session_user(
		&self,
		token: &str,
	) -> Result<Option<Uuid>, ServiceError> {
		let user_id = sqlx::query_scalar("SELECT user_id FROM sessions WHERE token = $1")
			.bind(token)
			.fetch_optional(self.pool)
			.await?;

		Ok(user_id)
	}

	pub async fn exists(
		&self,
		id: Uuid,
	) -> Result<bool, ServiceError> {
		let exists = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
			.bind(id)
			.fetch_one(self.pool)
			.await?;

		Ok(exists)
	}
}
