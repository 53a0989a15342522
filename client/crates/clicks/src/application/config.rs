//! Engagement Configuration

use std::time::Duration;

/// Timing parameters of the click-task workflow
///
/// The required duration is snapshotted into the task at start; a
/// config change never affects a task already running.
#[derive(Debug, Clone)]
pub struct EngagementConfig {
    /// Minimum dwell time before a click verifies
    pub required: Duration,
    /// Engagement timer period
    pub tick_period: Duration,
    /// Window-liveness watcher period
    pub watcher_period: Duration,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            required: Duration::from_secs(60),
            tick_period: Duration::from_secs(1),
            watcher_period: Duration::from_secs(1),
        }
    }
}

impl EngagementConfig {
    /// Required dwell time in whole seconds
    pub fn required_secs(&self) -> u32 {
        self.required.as_secs() as u32
    }
}
