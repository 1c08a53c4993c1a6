use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
  #[error("Failed to read timeline: {0}")]
  ReadTimeline(#[from] io::Error),
  #[error("Timeline file '{0}' does not contain a timeline")]
  InvalidTimeline(String),
  #[error("Manual and combinator walkthroughs disagree for search '{search}'")]
  StylesDisagree { search: String },
}
