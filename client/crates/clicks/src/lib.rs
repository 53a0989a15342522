//! Click-Task Workflow Module
//!
//! Gates a reward-earning click behind a verifiable minimum-engagement
//! duration, using an auxiliary browser window as the proof surface.
//!
//! Clean Architecture structure:
//! - `domain/` - The task state machine, window ports, click gateway
//! - `application/` - The workflow engine and engagement config
//! - `infra/` - HTTP click gateway
//! - `presentation/` - View models for the task card
//!
//! ## Engagement model
//! - The countdown is the sole acceptance rule: once the elapsed time
//!   reaches the required duration the task is `Verified` - no server
//!   round-trip confirms engagement mid-flight; the server trusts and
//!   verifies at submission
//! - A window-liveness watcher abandons the task if the auxiliary
//!   window closes before verification; it is a heuristic, not a
//!   guarantee
//! - Exactly one ticker and one watcher run per active task, and every
//!   exit transition tears both down

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::EngagementConfig;
pub use application::workflow::{ClickWorkflow, TaskSnapshot};
pub use domain::record::{ClickReceipt, ClickRecord};
pub use domain::surface::{OfferSurface, SurfaceError, SurfaceHandle};
pub use domain::task::{ClickTask, TaskState, Tick};
pub use error::{ClickError, ClickResult};
pub use infra::http::HttpClickGateway;
pub use presentation::view::TaskView;
