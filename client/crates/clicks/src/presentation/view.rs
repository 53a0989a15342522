//! Task Card View Model

use crate::application::workflow::TaskSnapshot;
use crate::domain::task::TaskState;
use rust_decimal::Decimal;

/// Everything the current-task card renders
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub title: String,
    pub posted_by: String,
    /// Reward per verified click
    pub reward: Decimal,
    pub description: String,
    /// 0..=100
    pub progress_percent: u8,
    /// Elapsed time as MM:SS
    pub elapsed_clock: String,
    /// Required time as MM:SS
    pub required_clock: String,
    /// Confirm button enabled (task verified)
    pub confirm_enabled: bool,
    /// Engagement timer still counting
    pub timer_running: bool,
    /// The keep-the-page-open reminder line
    pub reminder: String,
}

/// Seconds as MM:SS
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl TaskView {
    /// View for an active task; `None` while idle or abandoned
    pub fn from_snapshot(snapshot: &TaskSnapshot) -> Option<TaskView> {
        let TaskSnapshot::Active {
            offer,
            state,
            elapsed_secs,
            required_secs,
        } = snapshot
        else {
            return None;
        };

        let percent = if *required_secs == 0 {
            100
        } else {
            ((*elapsed_secs as u64 * 100) / *required_secs as u64).min(100) as u8
        };

        Some(TaskView {
            title: offer.title.clone(),
            posted_by: offer.username.clone(),
            reward: offer.epc,
            description: offer.description.clone(),
            progress_percent: percent,
            elapsed_clock: format_clock(*elapsed_secs),
            required_clock: format_clock(*required_secs),
            confirm_enabled: *state == TaskState::Verified,
            timer_running: *state == TaskState::Started,
            reminder: format!(
                "Remember: you must engage with the page for the minimum time to receive \
                 credit. Keep the offer page open for at least {} seconds.",
                required_secs
            ),
        })
    }
}
