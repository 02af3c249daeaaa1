use serde::{Deserialize, Serialize};

use crate::domain::post::entity::{Category, Post};

pub const POSTS_PER_PAGE: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
	#[default]
	Latest,
	Oldest,
	Title,
}

/// Which fields the search term is matched against.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
	#[default]
	Title,
	TitleContent,
}

/// What the reader asked the list view for. Defaults mirror a fresh
/// page load: free board, newest first, title search, first page.
#[derive(Clone, Debug, Deserialize)]
pub struct ListSelection {
	#[serde(default)]
	pub category: Category,
	#[serde(default)]
	pub search: String,
	#[serde(default)]
	pub scope: SearchScope,
	#[serde(default)]
	pub sort: SortOrder,
	#[serde(default = "first_page")]
	pub page: usize,
}

fn first_page() -> usize {
	1
}

impl Default for ListSelection {
	fn default() -> Self {
		Self {
			category: Category::default(),
			search: String::new(),
			scope: SearchScope::default(),
			sort: SortOrder::default(),
			page: 1,
		}
	}
}

impl ListSelection {
	fn matches(
		&self,
		post: &Post,
	) -> bool {
		if post.category != self.category {
			return false;
		}
		if self.search.is_empty() {
			return true;
		}
		let term = self.search.to_lowercase();
		let in_title = post.title.to_lowercase().contains(&term);
		match self.scope {
			SearchScope::Title => in_title,
			SearchScope::TitleContent => in_title || post.content.to_lowercase().contains(&term),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardPage {
	pub posts: Vec<Post>,
	pub matched: usize,
	pub total_pages: usize,
	pub page: usize,
}

/// Pure derivation of the visible list. Recomputed in full on every
/// read; the snapshot itself is never reordered.
pub fn derive_page(
	snapshot: &[Post],
	selection: &ListSelection,
) -> BoardPage {
	let mut matched: Vec<&Post> = snapshot.iter().filter(|post| selection.matches(post)).collect();

	match selection.sort {
		SortOrder::Latest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
		SortOrder::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
		SortOrder::Title => matched.sort_by(|a, b| a.title.cmp(&b.title)),
	}

	let total = matched.len();
	let total_pages = (total + POSTS_PER_PAGE - 1) / POSTS_PER_PAGE;
	let page = selection.page.max(1);
	let posts = matched
		.into_iter()
		.skip((page - 1) * POSTS_PER_PAGE)
		.take(POSTS_PER_PAGE)
		.cloned()
		.collect();

	BoardPage {
		posts,
		matched: total,
		total_pages,
		page,
	}
}
