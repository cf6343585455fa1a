//! Tracing initialization and per-root walk span helpers.

use std::{path::Path, time::Instant};

use anyhow::Result;
use tracing::{debug, info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

use crate::check::CheckSettings;

/// Filter used when `RUST_LOG` is unset. Keeps successful runs silent.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` with stderr output.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span covering the walk of a single root.
pub struct RootSpan {
    span: Span,
    started_at: Instant,
}

impl RootSpan {
    pub fn start(root: &Path) -> Self {
        let span = info_span!(
            target: "copyright_check::walk",
            "walk_root",
            root = %root.display()
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Enter the span for the duration of the returned guard.
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record completion with the number of candidates checked under this root.
    pub fn finish(self, checked: usize, missing: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "copyright_check::walk",
            checked = checked,
            missing = missing,
            elapsed_ms = elapsed_ms,
            "Finished walking root"
        );
    }
}

/// Emit the effective settings at debug level.
pub fn log_settings(settings: &CheckSettings) {
    debug!(
        target: "copyright_check::settings",
        extensions = ?settings.extensions,
        excluded_dirs = ?settings.excluded_dirs,
        pattern = settings.header.as_str(),
        max_lines = settings.max_lines,
        mode = settings.mode.as_str(),
        "Resolved check settings"
    );
}
