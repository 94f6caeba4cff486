// Step renderer: shows each section in the terminal and drives the session.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use survey_engine::questionnaire::{
    CONSENT_QUESTION, CONSENT_TEXT, CONSENT_TITLE, SURVEY_TITLE, THANK_YOU_TEXT,
};
use survey_engine::{Question, QuestionKind, Reply, Section, Step, SurveySession, OTHER_SPECIFY};

use crate::survey::console::Console;
use crate::survey::gateway::{PersistenceGateway, Persisted};
use crate::survey::*;

const PROGRESS_WIDTH: usize = 30;

/// What the respondent asked for at the bottom of a section.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Navigation {
    /// Next, or Submit on the last data step, with the replies of the section.
    Next(Vec<Reply>),
    /// The replies of the section are dropped.
    Back,
}

/// Runs the questionnaire until the respondent stops on the confirmation page.
///
/// Returns the number of responses persisted during the run.
pub fn run_questionnaire<R, W, S, C>(
    console: &mut Console<R, W>,
    gateway: &PersistenceGateway<S>,
    clock: C,
) -> SurveyResult<u32>
where
    R: BufRead,
    W: Write,
    S: ResponseStore,
    C: Fn() -> NaiveDateTime,
{
    console.say(SURVEY_TITLE)?;
    console.say("")?;
    if !consent(console)? {
        console.say("Please provide your consent to continue.")?;
        return Ok(0);
    }

    let mut session = SurveySession::new();
    let mut submitted: u32 = 0;
    loop {
        let step = session.step();
        console.say("")?;
        console.say(&progress_bar(step))?;
        let section = match session.section() {
            Some(s) => s,
            None => {
                thank_you(console)?;
                if console.confirm("Submit another response?")? {
                    session.reset();
                    continue;
                }
                return Ok(submitted);
            }
        };
        match render_section(console, section)? {
            Navigation::Back => {
                if let Err(e) = session.back() {
                    debug!("run_questionnaire: back ignored: {}", e);
                }
            }
            Navigation::Next(replies) if step == Step::Suggestions => {
                let persisted = session.submit(&replies, clock(), |row| gateway.append(row))?;
                if let Persisted::Fallback { path, reason } = persisted {
                    console.say(&format!("Google Sheets failed: {}", reason))?;
                    console.say(&format!("Saving locally as backup... ({})", path))?;
                }
                submitted += 1;
            }
            Navigation::Next(replies) => {
                session.advance(&replies)?;
            }
        }
    }
}

fn consent<R: BufRead, W: Write>(console: &mut Console<R, W>) -> SurveyResult<bool> {
    console.say(CONSENT_TITLE)?;
    console.say(CONSENT_TEXT)?;
    console.confirm(CONSENT_QUESTION)
}

fn thank_you<R: BufRead, W: Write>(console: &mut Console<R, W>) -> SurveyResult<()> {
    console.say("Thank you for participating!")?;
    console.say(THANK_YOU_TEXT)
}

pub fn progress_bar(step: Step) -> String {
    let filled = (step.progress() * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled),
        step
    )
}

/// Shows the questions of a section, then asks where to go.
pub fn render_section<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    section: &Section,
) -> SurveyResult<Navigation> {
    console.say(section.title)?;
    if let Some(caption) = section.caption {
        console.say(caption)?;
    }
    if let Some((heading, body)) = section.help {
        console.say(&format!("{}: {}", heading, body))?;
    }
    let mut replies: Vec<Reply> = Vec::new();
    for q in section.questions.iter() {
        console.say("")?;
        replies.push(ask_question(console, q)?);
    }
    console.say("")?;
    let first = section.step.backward().is_none();
    let last = section.step.forward().is_none();
    let prompt = match (first, last) {
        (true, _) => "[n]ext:",
        (false, true) => "[b]ack or [s]ubmit:",
        (false, false) => "[b]ack or [n]ext:",
    };
    loop {
        let answer = console.ask(prompt)?.trim().to_lowercase();
        match answer.as_str() {
            "b" | "back" if !first => return Ok(Navigation::Back),
            "n" | "next" | "" if !last => return Ok(Navigation::Next(replies)),
            "s" | "submit" | "" if last => return Ok(Navigation::Next(replies)),
            _ => {}
        }
    }
}

fn ask_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    q: &Question,
) -> SurveyResult<Reply> {
    match &q.kind {
        QuestionKind::Text { placeholder } => {
            let prompt = match placeholder {
                Some(p) => format!("{} ({}):", q.prompt, p),
                None => format!("{}:", q.prompt),
            };
            Ok(Reply::Text(console.ask(&prompt)?))
        }
        QuestionKind::TextArea => Ok(Reply::Text(console.ask(&format!("{}:", q.prompt))?)),
        QuestionKind::Select {
            placeholder,
            options,
            other,
        } => {
            console.say(q.prompt)?;
            console.say(&format!("  0) {}", placeholder))?;
            list_options(console, options)?;
            let selected = ask_single(console, options.len())?.map(|i| options[i].to_string());
            let other_text = follow_up(console, *other, selected.iter())?;
            Ok(Reply::Choice {
                selected,
                other: other_text,
            })
        }
        QuestionKind::Radio { options } => {
            console.say(q.prompt)?;
            list_options(console, options)?;
            let selected = ask_single(console, options.len())?.map(|i| options[i].to_string());
            Ok(Reply::Choice {
                selected,
                other: None,
            })
        }
        QuestionKind::MultiSelect { options, other } => {
            console.say(q.prompt)?;
            list_options(console, options)?;
            let selected: Vec<String> = loop {
                let answer = console.ask("Numbers separated by commas (empty for none):")?;
                match parse_selection(&answer, options.len()) {
                    Some(idxs) => break idxs.iter().map(|i| options[*i].to_string()).collect(),
                    None => console.say("Please enter numbers from the list.")?,
                }
            };
            let other_text = follow_up(console, *other, selected.iter())?;
            Ok(Reply::Choices {
                selected,
                other: other_text,
            })
        }
    }
}

fn list_options<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &[&str],
) -> SurveyResult<()> {
    for (idx, o) in options.iter().enumerate() {
        console.say(&format!("  {}) {}", idx + 1, o))?;
    }
    Ok(())
}

/// Index of the picked option, `None` for the placeholder or no answer.
fn ask_single<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    num_options: usize,
) -> SurveyResult<Option<usize>> {
    loop {
        let answer = console.ask("Number (empty to skip):")?;
        let answer = answer.trim();
        if answer.is_empty() || answer == "0" {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if n >= 1 && n <= num_options => return Ok(Some(n - 1)),
            _ => console.say("Please enter a number from the list.")?,
        }
    }
}

// Asks for the free text of "Other (specify)" when it was picked.
fn follow_up<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: Option<&str>,
    mut selected: impl Iterator<Item = &'a String>,
) -> SurveyResult<Option<String>> {
    match prompt {
        Some(p) if selected.any(|s| s == OTHER_SPECIFY) => {
            Ok(Some(console.ask(&format!("{}:", p))?))
        }
        _ => Ok(None),
    }
}

/// Parses "1, 3,6" into zero-based indexes. Duplicates are dropped, order is kept.
pub fn parse_selection(input: &str, num_options: usize) -> Option<Vec<usize>> {
    let mut res: Vec<usize> = Vec::new();
    for part in input.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
        match part.parse::<usize>() {
            Ok(n) if n >= 1 && n <= num_options => {
                if !res.contains(&(n - 1)) {
                    res.push(n - 1);
                }
            }
            _ => return None,
        }
    }
    Some(res)
}
