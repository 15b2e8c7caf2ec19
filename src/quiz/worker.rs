use crate::quiz::console::Console;
use crate::quiz::question::QuestionGenerator;
use rand::Rng;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;

/// Why the quiz loop stopped on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStop {
    /// The answer stream was closed
    InputClosed,
    /// The session controller dropped its receiver
    ControllerGone,
}

/// Ask questions until the input closes or nobody listens anymore.
///
/// Blocking: run it on its own thread. Every scored answer is sent on
/// `answers` in completion order; the send waits for the controller to
/// make room, so the loop is never more than one result ahead.
pub fn run_quiz<R, I, O>(
    mut generator: QuestionGenerator<R>,
    mut console: Console<I, O>,
    answers: mpsc::Sender<bool>,
) -> QuizStop
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    clear(&mut console);

    loop {
        let question = generator.next_question();
        if let Err(e) = console.ask(&question) {
            log::warn!("Failed to print question: {}", e);
        }

        let Some(answer) = console.read_answer() else {
            log::info!("Answer input closed, quiz loop stopping");
            return QuizStop::InputClosed;
        };

        clear(&mut console);

        let correct = question.is_correct(answer);
        if let Err(e) = console.report(&question, correct) {
            log::warn!("Failed to print feedback: {}", e);
        }
        log::debug!(
            "{} = {}, answered {} ({})",
            question,
            question.correct_answer(),
            answer,
            correct
        );

        if answers.blocking_send(correct).is_err() {
            log::debug!("Session controller gone, dropping last answer");
            return QuizStop::ControllerGone;
        }
    }
}

fn clear<I: BufRead, O: Write>(console: &mut Console<I, O>) {
    if let Err(e) = console.clear() {
        log::warn!("Failed to clear screen: {}", e);
    }
}
