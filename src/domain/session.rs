//! Session store: the single owner of dashboard state.
//!
//! Transitions are pure. [`Session::apply`] consumes the current state and an
//! [`Action`] and returns the next state plus any submission to forward.
//! Derived state (candidate pool, page resets, capacity flag) is refreshed by
//! [`Session::recompute_derived`] after every action, so there are no
//! implicit dependencies between the pieces.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::domain::action::Action;
use crate::domain::aggregate::Summary;
use crate::domain::company::Company;
use crate::domain::date_filter::{active_operations, historical_windows, HistoricalWindow};
use crate::domain::error::{DashboardError, SelectionError};
use crate::domain::operation::Operation;
use crate::domain::pager::{page_count, ListView, PageInfo, PageState};
use crate::domain::reference_data::ReferenceData;
use crate::domain::selection::SelectionState;
use crate::domain::settings::TradingSettings;
use crate::ports::submission_port::SubmissionPort;

/// Snapshot of the selected companies handed to the submission sink.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSubmission<'a> {
    pub date: Option<NaiveDate>,
    pub companies: Vec<&'a Company>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission<'a> {
    Selection(SelectionSubmission<'a>),
    Settings(TradingSettings),
}

/// Inputs the candidate pool was last built from. A change in either one
/// changes the identity of both lists.
type PoolKey = (Option<NaiveDate>, usize);

#[derive(Debug, Clone)]
pub struct Session<'a> {
    reference: &'a ReferenceData,
    today: NaiveDate,
    date: Option<NaiveDate>,
    settings: TradingSettings,
    selection: SelectionState<'a>,
    earnings_page: PageState,
    selected_page: PageState,
    last_error: Option<SelectionError>,
    capacity_exceeded: bool,
    pool_key: PoolKey,
}

#[derive(Debug)]
pub struct Transition<'a> {
    pub session: Session<'a>,
    pub submission: Option<Submission<'a>>,
}

impl<'a> Session<'a> {
    /// Fresh session: no date, empty buckets, both lists on page 1.
    pub fn new(reference: &'a ReferenceData, settings: TradingSettings, today: NaiveDate) -> Self {
        let capacity = settings.trades_per_day;
        Self {
            reference,
            today,
            date: None,
            selection: SelectionState::new(reference.companies(), capacity),
            settings,
            earnings_page: PageState::default(),
            selected_page: PageState::default(),
            last_error: None,
            capacity_exceeded: false,
            pool_key: (None, capacity),
        }
    }

    pub fn with_page_size(mut self, size: usize) -> Self {
        self.earnings_page = PageState::new(size);
        self.selected_page = PageState::new(size);
        self
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn settings(&self) -> &TradingSettings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionState<'a> {
        &self.selection
    }

    pub fn last_error(&self) -> Option<&SelectionError> {
        self.last_error.as_ref()
    }

    pub fn capacity_exceeded(&self) -> bool {
        self.capacity_exceeded
    }

    pub fn page(&self, view: ListView) -> &PageState {
        match view {
            ListView::Earnings => &self.earnings_page,
            ListView::Selected => &self.selected_page,
        }
    }

    fn list_len(&self, view: ListView) -> usize {
        match view {
            ListView::Earnings => self.selection.available().len(),
            ListView::Selected => self.selection.selected().len(),
        }
    }

    /// Applies one action and refreshes derived state.
    pub fn apply(mut self, action: Action) -> Transition<'a> {
        debug!("apply: {action}");
        let submission = match action {
            Action::SetDate(date) => {
                self.date = date;
                None
            }
            Action::SetCapacity(capacity) => {
                self.settings.trades_per_day = capacity;
                None
            }
            Action::Select(ticker) => {
                match self.selection.select(&ticker) {
                    Ok(company) => {
                        debug!("selected {}", company.ticker);
                        self.last_error = None;
                    }
                    Err(e) => self.reject(e),
                }
                None
            }
            Action::Deselect(ticker) => {
                match self.selection.deselect(&ticker, self.date.is_some()) {
                    Ok(company) => {
                        debug!("deselected {}", company.ticker);
                        self.last_error = None;
                    }
                    Err(e) => self.reject(e),
                }
                None
            }
            Action::SetPage(view, index) => {
                let count = page_count(self.list_len(view), self.page(view).size());
                match view {
                    ListView::Earnings => self.earnings_page.set(index, count),
                    ListView::Selected => self.selected_page.set(index, count),
                }
                None
            }
            Action::SubmitSelection => {
                if self.selection.capacity_exceeded() {
                    self.reject(SelectionError::SubmissionBlocked {
                        selected: self.selection.selected().len(),
                        capacity: self.selection.capacity(),
                    });
                    None
                } else {
                    Some(Submission::Selection(SelectionSubmission {
                        date: self.date,
                        companies: self.selection.submit(),
                    }))
                }
            }
            Action::SubmitSettings(settings) => match settings.validate() {
                Ok(()) => {
                    self.settings = settings;
                    Some(Submission::Settings(self.settings.clone()))
                }
                Err(e) => {
                    self.reject(e);
                    None
                }
            },
        };
        self.recompute_derived();
        Transition {
            session: self,
            submission,
        }
    }

    fn reject(&mut self, err: SelectionError) {
        warn!("action rejected: {err}");
        self.last_error = Some(err);
    }

    /// Post-transition hook.
    ///
    /// When the date or capacity differs from what the pool was built from,
    /// the pool is rebuilt, both lists return to page 1, and any stale
    /// rejection is dropped. Page indices are then clamped to the current
    /// page counts and the capacity flag is refreshed.
    ///
    /// Re-applying the date already in effect is not a change and leaves the
    /// pool and pages as they are.
    pub fn recompute_derived(&mut self) {
        let key = (self.date, self.settings.trades_per_day);
        if key != self.pool_key {
            self.selection.set_capacity(self.settings.trades_per_day);
            self.selection.activate(self.date.is_some());
            self.earnings_page.reset();
            self.selected_page.reset();
            self.last_error = None;
            self.pool_key = key;
            debug!(
                "pool rebuilt: {} available, {} selected",
                self.selection.available().len(),
                self.selection.selected().len()
            );
        }

        for view in [ListView::Earnings, ListView::Selected] {
            let count = page_count(self.list_len(view), self.page(view).size());
            let index = self.page(view).index();
            match view {
                ListView::Earnings => self.earnings_page.set(index, count),
                ListView::Selected => self.selected_page.set(index, count),
            }
        }

        self.capacity_exceeded = self.selection.capacity_exceeded();
    }

    /// Rendering-boundary snapshot of the current state.
    pub fn view(&self) -> DashboardView<'_> {
        let operations = self.reference.operations();
        let active = active_operations(operations, self.date);
        let summary = Summary::compute(&active);
        let capacity = self.selection.capacity();

        let message = match (&self.last_error, self.capacity_exceeded) {
            (Some(err), _) => Some(err.to_string()),
            (None, true) => Some(SelectionError::CapacityExceeded { capacity }.to_string()),
            (None, false) => None,
        };

        DashboardView {
            date: self.date,
            today: self.today,
            earnings: self.earnings_page.slice(self.selection.available()),
            earnings_page: self.earnings_page.info(self.selection.available().len()),
            selected: self.selected_page.slice(self.selection.selected()),
            selected_page: self.selected_page.info(self.selection.selected().len()),
            active_operations: active,
            historical: historical_windows(operations, self.date, self.today),
            summary,
            message,
            capacity,
            capacity_exceeded: self.capacity_exceeded,
            submit_enabled: !self.capacity_exceeded,
            settings: &self.settings,
        }
    }
}

/// Everything the presentation layer needs after an action.
#[derive(Debug, Clone)]
pub struct DashboardView<'v> {
    pub date: Option<NaiveDate>,
    pub today: NaiveDate,
    pub earnings: &'v [&'v Company],
    pub earnings_page: PageInfo,
    pub selected: &'v [&'v Company],
    pub selected_page: PageInfo,
    pub active_operations: Vec<&'v Operation>,
    pub historical: Vec<HistoricalWindow<'v>>,
    pub summary: Summary,
    pub message: Option<String>,
    pub capacity: usize,
    pub capacity_exceeded: bool,
    pub submit_enabled: bool,
    pub settings: &'v TradingSettings,
}

/// Applies `actions` in order, forwarding every submission to `sink`.
///
/// Rejected actions are not errors; they only surface in the view. The only
/// failures are sink failures.
pub fn replay<'a, I>(
    mut session: Session<'a>,
    actions: I,
    sink: &mut dyn SubmissionPort,
) -> Result<Session<'a>, DashboardError>
where
    I: IntoIterator<Item = Action>,
{
    for action in actions {
        let Transition {
            session: next,
            submission,
        } = session.apply(action);
        session = next;
        match submission {
            Some(Submission::Selection(s)) => sink.submit_selection(&s)?,
            Some(Submission::Settings(s)) => sink.submit_settings(&s)?,
            None => {}
        }
    }
    Ok(session)
}
