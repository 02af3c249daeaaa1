use serde::{Deserialize, Serialize};

use crate::domain::post::entity::Category;

/// Change notifications published on the board event channel. Only
/// inserts are announced; everything else reconciles on the next fetch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BoardEvent {
	PostCreated {
		id: i64,
		category: Category,
		title: String,
	},
}

impl BoardEvent {
	pub(crate) fn to_frame(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}
}

#[test]
fn test_enum_representation() {
	let event = BoardEvent::PostCreated {
		id: 1,
		category: Category::Free,
		title: "hello board".to_string(),
	};

	let jsonified = event.to_frame().unwrap();
	assert!(jsonified.contains("PostCreated"));
	assert!(jsonified.contains("hello board"));

	let BoardEvent::PostCreated { id, .. } = serde_json::from_str::<BoardEvent>(&jsonified).unwrap();
	assert_eq!(id, 1);
}
