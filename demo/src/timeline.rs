use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use optional_ext_core::Optional;

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TweetId(pub u64);

#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tweet {
  pub id: TweetId,
  pub author: String,
  pub text: String,
  pub in_reply_to: Optional<TweetId>,
  pub posted_at: DateTime<Utc>,
}

#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Author {
  pub handle: String,
  pub name: String,
}

/// Tweets in posting order, and the authors who posted them.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Timeline {
  tweets: Vec<Tweet>,
  authors: Vec<Author>,
}

impl Timeline {
  pub fn new(tweets: Vec<Tweet>, authors: Vec<Author>) -> Self {
    Self { tweets, authors }
  }

  /// Built-in timeline: a tweet mentioning "foo" that replies to an earlier tweet by `@knatten`.
  pub fn sample() -> Self {
    let at = |minute: u32| Utc.with_ymd_and_hms(2017, 3, 9, 12, minute, 0).single().unwrap_or_default();
    let tweets = vec![
      Tweet {
        id: TweetId(1),
        author: "@knatten".to_string(),
        text: "Proposal: transform and transform_opt for optional".to_string(),
        in_reply_to: Optional::empty(),
        posted_at: at(0),
      },
      Tweet {
        id: TweetId(2),
        author: "@reviewer".to_string(),
        text: "foo, but what about value categories?".to_string(),
        in_reply_to: Optional::new(TweetId(1)),
        posted_at: at(5),
      },
    ];
    let authors = vec![
      Author { handle: "@knatten".to_string(), name: "Anders".to_string() },
      Author { handle: "@reviewer".to_string(), name: "Reviewer".to_string() },
    ];
    Self::new(tweets, authors)
  }

  pub fn tweets(&self) -> &[Tweet] { &self.tweets }

  pub fn tweet(&self, id: TweetId) -> Optional<&Tweet> {
    self.tweets.iter().find(|t| t.id == id).into()
  }

  /// Returns the first tweet whose text contains `search`.
  pub fn find_first(&self, search: &str) -> Optional<&Tweet> {
    self.tweets.iter().find(|t| t.text.contains(search)).into()
  }

  /// Returns the tweet that `tweet` replies to, if it replies to a tweet in this timeline.
  pub fn replied_to(&self, tweet: &Tweet) -> Optional<&Tweet> {
    tweet.in_reply_to.transform_opt(|&id| self.tweet(id))
  }

  /// Returns the author of `tweet`, or an author with only a handle if they are not known in this timeline.
  pub fn lookup_author(&self, tweet: &Tweet) -> Author {
    self.authors.iter()
      .find(|a| a.handle == tweet.author)
      .cloned()
      .unwrap_or_else(|| Author { handle: tweet.author.clone(), name: String::new() })
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn find_first_matches_text() {
    let timeline = Timeline::sample();
    assert_eq!(timeline.find_first("foo").transform(|t| t.id), Optional::new(TweetId(2)));
    assert!(timeline.find_first("bar").is_empty());
  }

  #[test]
  fn replied_to_follows_reply_chain() {
    let timeline = Timeline::sample();
    let reply = timeline.tweet(TweetId(2)).into_value().unwrap();
    assert_eq!(timeline.replied_to(reply).transform(|t| t.id), Optional::new(TweetId(1)));
    let original = timeline.tweet(TweetId(1)).into_value().unwrap();
    assert!(timeline.replied_to(original).is_empty());
  }

  #[test]
  fn unknown_author_keeps_handle() {
    let timeline = Timeline::new(Timeline::sample().tweets().to_vec(), Vec::new());
    let author = timeline.lookup_author(&timeline.tweets()[0]);
    assert_eq!(author.handle, "@knatten");
    assert!(author.name.is_empty());
  }
}
