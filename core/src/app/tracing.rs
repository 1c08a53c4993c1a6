use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builder for console tracing of an application.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  fn console_filter(&mut self) -> EnvFilter {
    self.console_filter.take().unwrap_or_else(|| EnvFilter::try_from_env("CONSOLE_LOG").unwrap_or_default())
  }

  /// Install a subscriber writing to stderr as the global default.
  ///
  /// Does nothing but log a warning when a global default subscriber was already installed.
  pub fn build(mut self) -> AppTracing {
    let console_filter = self.console_filter();
    let layered = tracing_subscriber::registry().with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter)
    );
    let installed = match layered.try_init() {
      Ok(()) => true,
      Err(cause) => {
        tracing::warn!(%cause, "Cannot install console tracing; a global default subscriber is already set");
        false
      }
    };
    AppTracing { installed }
  }
}

/// Console tracing of an application, created by [`AppTracingBuilder`].
#[derive(Debug)]
pub struct AppTracing {
  installed: bool,
}
impl AppTracing {
  /// Whether this instance installed the global default subscriber.
  pub fn is_installed(&self) -> bool { self.installed }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn second_install_is_not_fatal() {
    let _first = AppTracingBuilder::default()
      .with_console_filter(EnvFilter::new("off"))
      .build();
    let second = AppTracingBuilder::default()
      .with_console_filter(EnvFilter::new("off"))
      .build();
    assert!(!second.is_installed());
  }
}
