//! Walkthroughs comparing presence checks by hand ("manual") with combinator chains ("combinator").

use tracing::{debug, info};

use optional_ext_core::Optional;

use crate::error::DemoError;
use crate::timeline::{Author, Timeline, Tweet};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Style {
  Manual,
  Combinator,
}
impl Style {
  pub const ALL: [Style; 2] = [Style::Manual, Style::Combinator];

  pub fn name(self) -> &'static str {
    match self {
      Style::Manual => "manual",
      Style::Combinator => "combinator",
    }
  }
}

/// Author of the first tweet matching `search`.
pub fn author_of_first(timeline: &Timeline, search: &str, style: Style) -> Optional<Author> {
  match style {
    Style::Manual => {
      let found = timeline.find_first(search);
      if found.has_value() {
        match found.value() {
          Ok(tweet) => Optional::new(timeline.lookup_author(tweet)),
          Err(_) => Optional::empty(),
        }
      } else {
        Optional::empty()
      }
    }
    Style::Combinator => timeline.find_first(search).transform(|tweet| timeline.lookup_author(tweet)),
  }
}

/// Tweet that the first tweet matching `search` replies to.
pub fn replied_to_first<'t>(timeline: &'t Timeline, search: &str, style: Style) -> Optional<&'t Tweet> {
  match style {
    Style::Manual => {
      let found = timeline.find_first(search);
      match found.into_option() {
        Some(tweet) => timeline.replied_to(tweet),
        None => Optional::empty(),
      }
    }
    Style::Combinator => timeline.find_first(search).into_transform_opt(|tweet| timeline.replied_to(tweet)),
  }
}

/// Author of the tweet that the first tweet matching `search` replies to.
pub fn original_author(timeline: &Timeline, search: &str, style: Style) -> Optional<Author> {
  match style {
    Style::Manual => {
      let found = timeline.find_first(search);
      let replied_to = match found.get() {
        Some(tweet) => timeline.replied_to(tweet),
        None => Optional::empty(),
      };
      match replied_to.get() {
        Some(tweet) => Optional::new(timeline.lookup_author(tweet)),
        None => Optional::empty(),
      }
    }
    Style::Combinator => timeline.find_first(search)
      .into_transform_opt(|tweet| timeline.replied_to(tweet))
      .into_transform(|tweet| timeline.lookup_author(tweet)),
  }
}

/// Results of running every walkthrough in one style.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Report {
  pub style: Style,
  pub author_of_first: Optional<Author>,
  pub replied_to_first: Optional<Tweet>,
  pub original_author: Optional<Author>,
}

pub fn run(timeline: &Timeline, search: &str, style: Style) -> Report {
  let report = Report {
    style,
    author_of_first: author_of_first(timeline, search, style),
    replied_to_first: replied_to_first(timeline, search, style).into_transform(Tweet::clone),
    original_author: original_author(timeline, search, style),
  };
  debug!(style = style.name(), search, ?report, "ran walkthroughs");
  report
}

/// Run every walkthrough in every style, log the results, and check that all styles agree.
pub fn run_all(timeline: &Timeline, search: &str) -> Result<Vec<Report>, DemoError> {
  let reports: Vec<Report> = Style::ALL.iter().map(|&style| run(timeline, search, style)).collect();
  for report in &reports {
    let style = report.style.name();
    report.author_of_first.execute(|a| info!(style, handle = %a.handle, "author of first tweet matching search"));
    report.replied_to_first.execute(|t| info!(style, id = t.id.0, text = %t.text, "first matching tweet replies to"));
    report.original_author.execute(|a| info!(style, handle = %a.handle, "original author"));
  }
  if let [first, rest @ ..] = reports.as_slice() {
    for other in rest {
      if (&first.author_of_first, &first.replied_to_first, &first.original_author)
        != (&other.author_of_first, &other.replied_to_first, &other.original_author) {
        return Err(DemoError::StylesDisagree { search: search.to_string() });
      }
    }
  }
  Ok(reports)
}
