use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;

static IS_INIT: AtomicBool = AtomicBool::new(false);

const LOG_ENV: &str = "AMDIFY_LOG";

pub fn init() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if !IS_INIT.swap(true, Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer().with_writer(std::io::stderr))
      .with(EnvFilter::from_env(LOG_ENV))
      .with(tracing_subscriber::filter::Targets::new().with_targets(vec![("amdify", Level::TRACE)]))
      .init();
  }
}

/// Only installs a subscriber when `AMDIFY_LOG` is set, e.g.
/// `AMDIFY_LOG=amdify_swc_visitors=trace`.
pub fn enable_tracing_on_demand() {
  use tracing_subscriber::{fmt, prelude::*, EnvFilter};
  if std::env::var_os(LOG_ENV).is_none() {
    return;
  }
  if !IS_INIT.swap(true, Ordering::SeqCst) {
    tracing_subscriber::registry()
      .with(fmt::layer().with_writer(std::io::stderr))
      .with(EnvFilter::from_env(LOG_ENV))
      .init();
  }
}
