use std::error::Error;

use tracing::info;

use optional_ext_core::app::env::load_dotenv;
use optional_ext_core::app::storage::Storage;
use optional_ext_core::app::tracing::AppTracingBuilder;

use crate::config::Config;
use crate::walkthrough::Report;

pub mod config;
pub mod error;
pub mod timeline;
pub mod walkthrough;

fn main() -> Result<(), Box<dyn Error>> {
  load_dotenv();
  let _tracing = AppTracingBuilder::default().build();

  let config = Config::from_env();
  let storage = Storage::new("Demo");
  let timeline = config.load_timeline(&storage)?;
  info!(search = %config.search, tweets = timeline.tweets().len(), "running walkthroughs");

  let reports = walkthrough::run_all(&timeline, &config.search)?;
  for report in &reports {
    print_report(report);
  }
  Ok(())
}

fn print_report(report: &Report) {
  println!("{} style:", report.style.name());
  let author_of_first = report.author_of_first.as_ref().into_transform(|a| a.handle.as_str()).value_or("<none>");
  println!("  author of first tweet matching search: {}", author_of_first);
  let replied_to_first = report.replied_to_first.transform(|t| t.text.clone()).value_or_else(|| "<none>".to_string());
  println!("  first matching tweet replies to: {}", replied_to_first);
  let original_author = report.original_author.as_ref().into_transform(|a| a.handle.as_str()).value_or("<none>");
  println!("  original author: {}", original_author);
}
