pub mod builder;
mod config;
pub mod manual;
pub mod questionnaire;
pub mod quick_start;

use chrono::NaiveDateTime;
use log::{debug, info, warn};

pub use crate::builder::RowBuilder;
pub use crate::config::*;
pub use crate::questionnaire::section;

/// The in-progress submission of one respondent.
///
/// The session owns the current step and the accumulated answers. It is
/// created at the first interaction and cleared by [`SurveySession::reset`].
/// Every method that fails leaves the session untouched.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveySession {
    step: Step,
    answers: AnswerMapping,
}

impl Default for SurveySession {
    fn default() -> Self {
        SurveySession::new()
    }
}

impl SurveySession {
    pub fn new() -> SurveySession {
        SurveySession {
            step: Step::Background,
            answers: AnswerMapping::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerMapping {
        &self.answers
    }

    /// The page to display for the current step.
    pub fn section(&self) -> Option<&'static Section> {
        questionnaire::section(self.step)
    }

    /// Merges the replies of the current step and moves to the next one.
    ///
    /// The last data step only moves forward through [`SurveySession::submit`].
    pub fn advance(&mut self, replies: &[Reply]) -> Result<Step, SessionError> {
        let next = self.transition(Action::Forward, self.step.forward())?;
        let section = self.current_section(Action::Forward)?;
        let fields = section.collect(replies)?;
        debug!("advance: {:?} -> {:?}, fields: {:?}", self.step, next, fields);
        self.answers.merge(fields);
        self.step = next;
        Ok(next)
    }

    /// Goes back one step. The answers already merged are kept.
    pub fn back(&mut self) -> Result<Step, SessionError> {
        let previous = self.transition(Action::Back, self.step.backward())?;
        debug!("back: {:?} -> {:?}", self.step, previous);
        self.step = previous;
        Ok(previous)
    }

    /// Builds the response row from the replies of the last data step and hands it to `persist`.
    ///
    /// The session moves to the confirmation step only when `persist`
    /// succeeds. On failure the step and the answers stay as they were, so
    /// the respondent can submit again.
    pub fn submit<T, E, F>(
        &mut self,
        replies: &[Reply],
        at: NaiveDateTime,
        persist: F,
    ) -> Result<T, E>
    where
        F: FnOnce(&ResponseRow) -> Result<T, E>,
        E: From<SessionError>,
    {
        if self.step != Step::Suggestions {
            return Err(self.invalid(Action::Submit).into());
        }
        let section = self.current_section(Action::Submit)?;
        let fields = section.collect(replies)?;
        let row = RowBuilder::new(at)
            .answers(&self.answers)?
            .fields(fields)?
            .build();
        info!(
            "submit: built response row with {} columns at {}",
            row.len(),
            row.timestamp()
        );
        let res = persist(&row)?;
        self.step = Step::Done;
        Ok(res)
    }

    /// Clears everything and starts again at the first step.
    pub fn reset(&mut self) {
        debug!("reset: clearing {} answers", self.answers.len());
        self.step = Step::Background;
        self.answers.clear();
    }

    fn transition(&self, action: Action, target: Option<Step>) -> Result<Step, SessionError> {
        target.ok_or_else(|| self.invalid(action))
    }

    fn current_section(&self, action: Action) -> Result<&'static Section, SessionError> {
        questionnaire::section(self.step).ok_or_else(|| self.invalid(action))
    }

    fn invalid(&self, action: Action) -> SessionError {
        warn!("ignoring {:?} on {:?}", action, self.step);
        SessionError::InvalidTransition {
            from: self.step,
            action,
        }
    }
}
