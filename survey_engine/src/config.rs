// ********* Steps of the questionnaire ***********

use std::error::Error;
use std::fmt::Display;

use indexmap::IndexMap;

/// The steps a respondent walks through, in order.
///
/// The five data-entry steps are followed by the terminal confirmation step.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Section A: background information about the respondent and the club.
    Background,
    /// Section B: awareness of monitoring and evaluation.
    MEAwareness,
    /// Section C: effectiveness of the M&E strategies.
    Effectiveness,
    /// Section D: implementing M&E strategies.
    Implementation,
    /// Section E: suggestions for improvement. Submitting this step persists the response.
    Suggestions,
    /// Confirmation page.
    Done,
}

/// Total number of steps, confirmation included.
pub const TOTAL_STEPS: u32 = 6;

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Background,
        Step::MEAwareness,
        Step::Effectiveness,
        Step::Implementation,
        Step::Suggestions,
        Step::Done,
    ];

    /// The position of the step, between 1 and 6.
    pub fn number(&self) -> u32 {
        match self {
            Step::Background => 1,
            Step::MEAwareness => 2,
            Step::Effectiveness => 3,
            Step::Implementation => 4,
            Step::Suggestions => 5,
            Step::Done => 6,
        }
    }

    pub fn from_number(n: u32) -> Option<Step> {
        Step::ALL.iter().find(|s| s.number() == n).cloned()
    }

    /// Transition table for the forward action.
    ///
    /// Suggestions moves to Done only through a submission, never through a
    /// plain forward action.
    pub fn forward(&self) -> Option<Step> {
        match self {
            Step::Background => Some(Step::MEAwareness),
            Step::MEAwareness => Some(Step::Effectiveness),
            Step::Effectiveness => Some(Step::Implementation),
            Step::Implementation => Some(Step::Suggestions),
            Step::Suggestions => None,
            Step::Done => None,
        }
    }

    /// Transition table for the back action.
    pub fn backward(&self) -> Option<Step> {
        match self {
            Step::Background => None,
            Step::MEAwareness => Some(Step::Background),
            Step::Effectiveness => Some(Step::MEAwareness),
            Step::Implementation => Some(Step::Effectiveness),
            Step::Suggestions => Some(Step::Implementation),
            Step::Done => None,
        }
    }

    /// Fraction of the questionnaire reached when this step is displayed.
    pub fn progress(&self) -> f64 {
        self.number() as f64 / TOTAL_STEPS as f64
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {} of {}", self.number(), TOTAL_STEPS)
    }
}

// ********* Questions ***********

/// The option that asks for a free-text follow-up.
pub const OTHER_SPECIFY: &str = "Other (specify)";

/// Joins the selections of a multi-select question.
pub const MULTI_DELIMITER: &str = "; ";

/// Prefix stored in front of the follow-up text of a single-select "Other (specify)".
pub const OTHER_PREFIX: &str = "Other: ";

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum QuestionKind {
    /// One line of free text.
    Text { placeholder: Option<&'static str> },
    /// Longer free text.
    TextArea,
    /// A drop-down whose first entry is a placeholder. Picking the placeholder
    /// stores an empty string.
    Select {
        placeholder: &'static str,
        options: &'static [&'static str],
        /// Follow-up prompt shown when "Other (specify)" is picked.
        other: Option<&'static str>,
    },
    /// Radio buttons with nothing selected at first.
    Radio { options: &'static [&'static str] },
    /// Any number of options.
    MultiSelect {
        options: &'static [&'static str],
        /// Follow-up prompt shown when "Other (specify)" is among the selections.
        other: Option<&'static str>,
    },
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Question {
    /// The key under which the answer is stored.
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

/// What the respondent entered for one question, before normalization.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Reply {
    Text(String),
    /// `None` when the placeholder was kept or no radio button was selected.
    Choice {
        selected: Option<String>,
        other: Option<String>,
    },
    Choices {
        selected: Vec<String>,
        other: Option<String>,
    },
}

impl Reply {
    pub fn text(s: impl Into<String>) -> Reply {
        Reply::Text(s.into())
    }

    pub fn choice(s: impl Into<String>) -> Reply {
        Reply::Choice {
            selected: Some(s.into()),
            other: None,
        }
    }

    pub fn unanswered() -> Reply {
        Reply::Choice {
            selected: None,
            other: None,
        }
    }

    pub fn choices(selected: &[&str]) -> Reply {
        Reply::Choices {
            selected: selected.iter().map(|s| s.to_string()).collect(),
            other: None,
        }
    }

    /// Attaches the follow-up text of an "Other (specify)" choice.
    pub fn with_other(self, text: impl Into<String>) -> Reply {
        let text = Some(text.into());
        match self {
            Reply::Choice { selected, .. } => Reply::Choice {
                selected,
                other: text,
            },
            Reply::Choices { selected, .. } => Reply::Choices {
                selected,
                other: text,
            },
            x => x,
        }
    }
}

impl Question {
    /// Turns a reply into the string stored in the answer mapping.
    pub fn answer(&self, reply: &Reply) -> Result<String, SessionError> {
        match (&self.kind, reply) {
            (QuestionKind::Text { .. }, Reply::Text(s)) => Ok(s.clone()),
            (QuestionKind::TextArea, Reply::Text(s)) => Ok(s.clone()),
            (
                QuestionKind::Select {
                    placeholder,
                    options,
                    other,
                },
                Reply::Choice {
                    selected,
                    other: other_text,
                },
            ) => match selected.as_deref() {
                None => Ok(String::new()),
                Some(s) if s == *placeholder => Ok(String::new()),
                Some(s) if !has_option(options, s) => Err(self.invalid_option(s)),
                Some(s) if s == OTHER_SPECIFY && other.is_some() => Ok(format!(
                    "{}{}",
                    OTHER_PREFIX,
                    other_text.as_deref().unwrap_or_default()
                )),
                Some(s) => Ok(s.to_string()),
            },
            (QuestionKind::Radio { options }, Reply::Choice { selected, .. }) => {
                match selected.as_deref() {
                    None => Ok(String::new()),
                    Some(s) if !has_option(options, s) => Err(self.invalid_option(s)),
                    Some(s) => Ok(s.to_string()),
                }
            }
            (
                QuestionKind::MultiSelect { options, other },
                Reply::Choices {
                    selected,
                    other: other_text,
                },
            ) => {
                if let Some(s) = selected.iter().find(|s| !has_option(options, s)) {
                    return Err(self.invalid_option(s));
                }
                let mut joined = selected.join(MULTI_DELIMITER);
                // Only membership is checked: an empty follow-up still adds the delimiter.
                if other.is_some() && selected.iter().any(|s| s == OTHER_SPECIFY) {
                    joined.push_str(MULTI_DELIMITER);
                    joined.push_str(other_text.as_deref().unwrap_or_default());
                }
                Ok(joined)
            }
            _ => Err(SessionError::ReplyMismatch {
                question: self.id.to_string(),
            }),
        }
    }

    fn invalid_option(&self, option: &str) -> SessionError {
        SessionError::InvalidOption {
            question: self.id.to_string(),
            option: option.to_string(),
        }
    }
}

fn has_option(options: &[&str], s: &str) -> bool {
    options.iter().any(|o| *o == s)
}

/// One data-entry page of the questionnaire.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Section {
    pub step: Step,
    pub title: &'static str,
    pub caption: Option<&'static str>,
    /// Optional help, as (heading, body).
    pub help: Option<(&'static str, &'static str)>,
    pub questions: &'static [Question],
}

impl Section {
    /// The keys this section writes into the answer mapping.
    pub fn keys(&self) -> Vec<&'static str> {
        self.questions.iter().map(|q| q.id).collect()
    }

    /// Normalizes one reply per question, in question order.
    pub fn collect(&self, replies: &[Reply]) -> Result<Vec<(String, String)>, SessionError> {
        if replies.len() != self.questions.len() {
            return Err(SessionError::WrongReplyCount {
                step: self.step,
                expected: self.questions.len(),
                actual: replies.len(),
            });
        }
        self.questions
            .iter()
            .zip(replies.iter())
            .map(|(q, r)| q.answer(r).map(|a| (q.id.to_string(), a)))
            .collect()
    }
}

// ********* Accumulated data ***********

/// Question identifier to answer, in insertion order.
///
/// Keys are never removed. Answering a step again replaces the values in place.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct AnswerMapping {
    entries: IndexMap<String, String>,
}

impl AnswerMapping {
    pub fn new() -> AnswerMapping {
        AnswerMapping::default()
    }

    pub fn merge<I: IntoIterator<Item = (String, String)>>(&mut self, fields: I) {
        for (k, v) in fields {
            self.entries.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The name of the column holding the submission time.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// One finalized submission. Built once, never modified.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResponseRow {
    pub(crate) columns: Vec<(String, String)>,
}

impl ResponseRow {
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> Vec<String> {
        self.columns.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn timestamp(&self) -> &str {
        self.get(TIMESTAMP_KEY).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ********* Errors ***********

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Action {
    Forward,
    Back,
    Submit,
}

/// Errors raised by the session. The session state is left unchanged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SessionError {
    /// The action has no transition from the current step.
    InvalidTransition { from: Step, action: Action },
    /// The number of replies does not match the questions of the step.
    WrongReplyCount {
        step: Step,
        expected: usize,
        actual: usize,
    },
    /// The reply kind does not fit the question (text for a select, ...).
    ReplyMismatch { question: String },
    InvalidOption { question: String, option: String },
    /// The same key was produced by two different steps.
    DuplicateKey { key: String },
}

impl Error for SessionError {}

impl Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidTransition { from, action } => {
                write!(f, "cannot {:?} from {:?}", action, from)
            }
            SessionError::WrongReplyCount {
                step,
                expected,
                actual,
            } => write!(
                f,
                "{:?} expects {} replies, got {}",
                step, expected, actual
            ),
            SessionError::ReplyMismatch { question } => {
                write!(f, "reply does not fit question {}", question)
            }
            SessionError::InvalidOption { question, option } => {
                write!(f, "{:?} is not an option of question {}", option, question)
            }
            SessionError::DuplicateKey { key } => write!(f, "key {} produced twice", key),
        }
    }
}
