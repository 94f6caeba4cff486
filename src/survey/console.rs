use std::io::{BufRead, ErrorKind, Write};

use crate::survey::*;

/// Line-oriented terminal I/O.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Console<R, W> {
        Console { input, output }
    }

    pub fn say(&mut self, text: &str) -> SurveyResult<()> {
        writeln!(self.output, "{}", text).context(ConsoleSnafu {})
    }

    /// Prints the prompt and reads one line, without its line terminator.
    ///
    /// A line that is not valid UTF-8 is dropped and the prompt shown again.
    pub fn ask(&mut self, prompt: &str) -> SurveyResult<String> {
        let line = loop {
            write!(self.output, "{} ", prompt).context(ConsoleSnafu {})?;
            self.output.flush().context(ConsoleSnafu {})?;
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return InputClosedSnafu {}.fail(),
                Ok(_) => break line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    debug!("ask: unreadable answer to {:?}: {}", prompt, e);
                    self.say("Please retype your answer.")?;
                }
                Err(e) => return Err(e).context(ConsoleSnafu {}),
            }
        };
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        debug!("ask: {:?} -> {:?}", prompt, trimmed);
        Ok(trimmed)
    }

    /// A yes/no question. Anything but y or yes is a no.
    pub fn confirm(&mut self, prompt: &str) -> SurveyResult<bool> {
        let answer = self.ask(&format!("{} [y/N]", prompt))?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_strips_the_line_terminator_only() {
        let mut c = Console::new(Cursor::new("  Gor Mahia \r\nnext\n"), Vec::new());
        assert_eq!(c.ask("Club’s name").unwrap(), "  Gor Mahia ");
        assert_eq!(c.ask("Next?").unwrap(), "next");
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "Club’s name Next? ");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut c = Console::new(Cursor::new(""), Vec::new());
        assert!(matches!(c.ask("?"), Err(SurveyError::InputClosed {})));
    }

    #[test]
    fn invalid_utf8_is_asked_again() {
        let mut input: Vec<u8> = vec![0xff, b'\n'];
        input.extend_from_slice(b"Gor Mahia\n");
        let mut c = Console::new(Cursor::new(input), Vec::new());
        assert_eq!(c.ask("Club’s name").unwrap(), "Gor Mahia");
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(
            out,
            "Club’s name Please retype your answer.\nClub’s name "
        );
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let mut c = Console::new(Cursor::new("Y\nno\n\nyes\n"), Vec::new());
        assert!(c.confirm("Agree?").unwrap());
        assert!(!c.confirm("Agree?").unwrap());
        assert!(!c.confirm("Agree?").unwrap());
        assert!(c.confirm("Agree?").unwrap());
    }
}
