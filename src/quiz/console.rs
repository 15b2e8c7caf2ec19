//! Terminal side of the drill: prompts, feedback and answer parsing.
//!
//! Generic over the streams so a session can run headless from a scripted
//! `Cursor` while the binary uses stdin and stdout.

use crate::quiz::question::Question;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};

pub const RETRY_PROMPT: &str = "\nTry again: ";

pub struct Console<I: BufRead, O: Write> {
    input: I,
    output: O,
    clear_screen: bool,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Keep previous questions on screen, used for headless runs
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    pub fn ask(&mut self, question: &Question) -> io::Result<()> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()
    }

    pub fn report(&mut self, question: &Question, correct: bool) -> io::Result<()> {
        if correct {
            writeln!(self.output, "CORRECT\n")?;
        } else {
            writeln!(self.output, "INCORRECT: {}\n", question.correct_answer())?;
        }
        self.output.flush()
    }

    /// Block until a line parses as an integer.
    ///
    /// Failed reads and unparsable lines re-prompt. `None` means the input
    /// stream is closed and no answer will ever arrive.
    pub fn read_answer(&mut self) -> Option<i64> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => match line.trim().parse::<i64>() {
                    Ok(answer) => return Some(answer),
                    Err(e) => log::debug!("Unparsable answer {:?}: {}", line.trim(), e),
                },
                Err(e) => log::debug!("Failed to read answer: {}", e),
            }
            self.retry_prompt();
        }
    }

    fn retry_prompt(&mut self) {
        // The read loop continues even when the prompt cannot be shown
        let shown = write!(self.output, "{}", RETRY_PROMPT).and_then(|_| self.output.flush());
        if let Err(e) = shown {
            log::debug!("Failed to print retry prompt: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).without_clearing()
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_answer_trims_whitespace() {
        let mut console = console("  42 \r\n");
        assert_eq!(console.read_answer(), Some(42));
        assert_eq!(printed(console), "");
    }

    #[test]
    fn test_read_answer_reprompts_until_valid() {
        let mut console = console("abc\n\n7x\n-3\n");
        assert_eq!(console.read_answer(), Some(-3));
        assert_eq!(printed(console), RETRY_PROMPT.repeat(3));
    }

    #[test]
    fn test_read_answer_on_closed_input() {
        let mut console = console("oops\n");
        assert_eq!(console.read_answer(), None);
    }

    #[test]
    fn test_read_answer_without_trailing_newline() {
        let mut console = console("56");
        assert_eq!(console.read_answer(), Some(56));
        assert_eq!(console.read_answer(), None);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_read_answer_survives_failing_output() {
        let input = Cursor::new(b"x\n\n12\n".to_vec());
        let mut console = Console::new(input, BrokenPipe).without_clearing();
        assert_eq!(console.read_answer(), Some(12));
        assert_eq!(console.read_answer(), None);
    }

    #[test]
    fn test_prompt_and_feedback() {
        let question = Question {
            left: 7,
            right: 8,
            swapped: true,
        };
        let mut console = console("");
        console.ask(&question).unwrap();
        console.report(&question, true).unwrap();
        console.ask(&question).unwrap();
        console.report(&question, false).unwrap();

        assert_eq!(
            printed(console),
            "8 x 7: CORRECT\n\n8 x 7: INCORRECT: 56\n\n"
        );
    }

    #[test]
    fn test_clear_writes_escape_sequence() {
        let mut console = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new());
        console.clear().unwrap();
        assert!(!console.into_output().is_empty());
    }
}
