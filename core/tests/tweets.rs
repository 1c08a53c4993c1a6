use optional_ext_core::Optional;

#[derive(Clone, Debug)]
struct Tweet;

#[derive(Clone, Eq, PartialEq, Debug)]
struct Author {
  name: String,
}

fn find_first(_search: &str) -> Optional<Tweet> { Optional::new(Tweet) }

fn find_nothing(_search: &str) -> Optional<Tweet> { Optional::empty() }

fn lookup_author(_tweet: &Tweet) -> Author { Author { name: "@knatten".to_string() } }

fn tweet_replied_to(_tweet: &Tweet) -> Optional<Tweet> { Optional::new(Tweet) }

#[test]
fn transform_manual_style() {
  let foo = find_first("foo");
  let foo_author = match foo.value() {
    Ok(tweet) => Optional::new(lookup_author(tweet)),
    Err(_) => Optional::empty(),
  };
  assert_eq!(foo_author.value().map(|a| a.name.as_str()), Ok("@knatten"));
}

#[test]
fn transform_combinator_style() {
  let foo_author = find_first("foo").transform(lookup_author);
  assert_eq!(foo_author.value().map(|a| a.name.as_str()), Ok("@knatten"));
  assert_eq!(find_first("foo").transform(lookup_author).into_value().map(|a| a.name), Ok("@knatten".to_string()));
}

#[test]
fn transform_opt_combinator_style() {
  let foo_replied_to = find_first("foo").transform_opt(tweet_replied_to);
  assert!(foo_replied_to.has_value());
  assert!(find_nothing("foo").transform_opt(tweet_replied_to).is_empty());
}

#[test]
fn combined_chain() {
  let orig_author = find_first("foo")
    .transform_opt(tweet_replied_to)
    .transform(lookup_author);
  assert_eq!(orig_author, Optional::new(Author { name: "@knatten".to_string() }));

  let nobody = find_nothing("foo")
    .transform_opt(tweet_replied_to)
    .transform(lookup_author);
  assert!(nobody.is_empty());
}
