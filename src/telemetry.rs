//! Best-effort error telemetry.
//!
//! Reporting is never load-bearing: a missing, malformed, or otherwise
//! unusable DSN leaves the gateway running without telemetry instead of
//! failing startup.

use sentry::types::Dsn;
use sentry::{ClientInitGuard, ClientOptions};

use crate::config::Config;

/// Initialize the error reporter from configuration.
///
/// Returns `None` when `SENTRY_DSN` is absent or does not parse; the caller
/// is expected to discard that case without logging or retrying. On success
/// the returned guard keeps the reporter alive and must be held until
/// process exit.
pub fn init(config: &Config) -> Option<ClientInitGuard> {
    let raw = config.sentry_dsn.as_deref()?;
    let dsn: Dsn = raw.parse().ok()?;

    let guard = sentry::init(ClientOptions {
        dsn: Some(dsn),
        // Sample every transaction.
        traces_sample_rate: 1.0,
        release: sentry::release_name!(),
        ..Default::default()
    });

    Some(guard)
}
