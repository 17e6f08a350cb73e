//! Sink for submitted selections and settings.
//!
//! Submissions are terminal: nothing flows back into the session.

use crate::domain::error::DashboardError;
use crate::domain::session::SelectionSubmission;
use crate::domain::settings::TradingSettings;

pub trait SubmissionPort {
    fn submit_selection(&mut self, submission: &SelectionSubmission<'_>) -> Result<(), DashboardError>;

    fn submit_settings(&mut self, settings: &TradingSettings) -> Result<(), DashboardError>;
}
