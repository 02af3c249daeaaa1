mod create_comment;
mod create_post;
mod delete_post;
mod home;
mod like_post;
mod list_posts;
mod show_post;
mod update_post;

use axum::{
	routing::{get, post},
	Router,
};

use crate::domain::board::BoardStateWrapper;

pub fn create_routes() -> Router<BoardStateWrapper> {
	Router::new()
		.route("/", get(home::index))
		.route("/posts", get(list_posts::list_posts).post(create_post::create_post))
		.route(
			"/posts/:id",
			get(show_post::show_post).put(update_post::update_post).delete(delete_post::delete_post),
		)
		.route("/posts/:id/likes", post(like_post::like_post))
		.route("/posts/:id/comments", post(create_comment::create_comment))
}
