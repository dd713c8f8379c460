// SPDX-License-Identifier: MIT OR Apache-2.0

//! Holder for the currently live configuration.
//!
//! [`LiveConfig`] owns the `Context<'static>` the pipeline is currently
//! running from and performs the atomic handoff when a reload succeeds:
//! readers either see the complete previous configuration or the complete
//! new one, never a partially populated target.

use crate::domain::Context;
use crate::service::reconstruct::{reconstruct, ReconstructError};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Shared handle to the live configuration, with atomic replace-on-reload.
///
/// Cloning the handle is cheap and every clone observes the same live
/// context. [`current`](Self::current) hands out an `Arc` snapshot, so a
/// consumer that grabbed the previous configuration keeps a valid graph even
/// while a reload swaps the live reference underneath it.
///
/// The model itself takes no locks during graph mutation; serializing
/// configuration writes during a reload window remains the caller's
/// responsibility. Only the final swap is synchronized here.
///
/// # Examples
///
/// ```
/// use pipecfg::prelude::*;
///
/// # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let mut initial = Context::new();
/// initial.create_section("SERVICE", SectionKind::Service)?;
/// let live = LiveConfig::new(reconstruct(&initial)?);
///
/// // A freshly parsed candidate replaces the live context on success.
/// let mut candidate = Context::new();
/// candidate.create_section("tail", SectionKind::Input)?;
/// live.reload(&candidate)?;
/// assert_eq!(live.current().sections().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LiveConfig {
    inner: Arc<RwLock<Arc<Context<'static>>>>,
}

impl LiveConfig {
    /// Wraps an owned context as the initial live configuration.
    pub fn new(initial: Context<'static>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// Returns a snapshot of the live configuration.
    ///
    /// The snapshot stays valid after later reloads; it simply keeps the old
    /// graph alive until the last holder drops it.
    pub fn current(&self) -> Arc<Context<'static>> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            // A poisoned lock only means a panic elsewhere mid-swap; the
            // stored Arc is still a complete context.
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Reconstructs `candidate` and, on success, installs the result as the
    /// new live configuration.
    ///
    /// On failure the previous configuration stays live, the failed target
    /// is discarded, and the error is returned (and logged) so the reload
    /// trigger can report it — a failed reload never crashes the pipeline.
    pub fn reload(&self, candidate: &Context<'_>) -> Result<(), ReconstructError> {
        match reconstruct(candidate) {
            Ok(target) => {
                let target = Arc::new(target);
                match self.inner.write() {
                    Ok(mut guard) => *guard = target,
                    Err(poisoned) => *poisoned.into_inner() = target,
                }
                debug!("installed reloaded configuration");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "reload failed, keeping previous configuration");
                Err(err)
            }
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self::new(Context::new())
    }
}
