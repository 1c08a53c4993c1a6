#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};

use optional_ext_core::Optional;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Tweet {
  id: u64,
  in_reply_to: Optional<u64>,
}

#[test]
fn empty_is_null() {
  assert_eq!(serde_json::to_string(&Optional::<i32>::empty()).unwrap(), "null");
  assert_eq!(serde_json::from_str::<Optional<i32>>("null").unwrap(), Optional::empty());
}

#[test]
fn held_value_is_the_value() {
  assert_eq!(serde_json::to_string(&Optional::new("@knatten")).unwrap(), "\"@knatten\"");
  assert_eq!(serde_json::from_str::<Optional<i32>>("6").unwrap(), Optional::new(6));
}

#[test]
fn field_of_struct() {
  let tweet = Tweet { id: 2, in_reply_to: Optional::new(1) };
  let json = serde_json::to_value(&tweet).unwrap();
  assert_eq!(json, serde_json::json!({ "id": 2, "in_reply_to": 1 }));

  let tweet: Tweet = serde_json::from_value(serde_json::json!({ "id": 1, "in_reply_to": null })).unwrap();
  assert!(!tweet.in_reply_to.has_value());
}
