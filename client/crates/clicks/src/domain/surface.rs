//! Auxiliary Window Ports
//!
//! The browser's window-management primitive, abstracted at the seam
//! so the engine stays headless. The UI host implements these over
//! `window.open`-equivalents; tests use in-memory fakes.
//!
//! The handle for the active task is exclusively owned by the
//! workflow; no other component may open or close it while a task is
//! in progress.

use thiserror::Error;

/// Why the surface could not open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The browser blocked the popup
    #[error("the browser blocked the auxiliary window")]
    PopupBlocked,
}

/// A live auxiliary window
pub trait SurfaceHandle: Send + Sync {
    /// Whether the window reports closed. Polled by the liveness
    /// watcher; a heuristic, not a guarantee.
    fn is_closed(&self) -> bool;

    /// Bring the window to the front
    fn focus(&self);
}

/// Opens offer pages in auxiliary windows
pub trait OfferSurface: Send + Sync {
    /// Open the URL in a new auxiliary window
    fn open(&self, url: &str) -> Result<Box<dyn SurfaceHandle>, SurfaceError>;
}
