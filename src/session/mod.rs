//! Session controller.
//!
//! Starts the quiz worker on its own thread and multiplexes three events in
//! a single loop: the session deadline, an interruption signal and scored
//! answers coming back from the worker. The first terminating event wins and
//! the session is finalized exactly once.

pub mod signals;

pub use signals::{Interruption, ShutdownSignals};

use crate::config::QuizConfig;
use crate::quiz::{run_quiz, Console, QuestionGenerator};
use crate::recording::{finalize, SessionSummary};
use crate::Result;
use chrono::Local;
use rand::Rng;
use std::fmt;
use std::future::Future;
use std::io::{BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// What ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Deadline,
    Interrupted(Interruption),
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEnd::Deadline => write!(f, "time is up"),
            SessionEnd::Interrupted(signal) => write!(f, "interrupted by {}", signal),
        }
    }
}

/// Answers collected until the session ended, in completion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub results: Vec<bool>,
    pub end: SessionEnd,
}

/// Collect answers until the deadline or an interruption.
///
/// Terminating events are checked before answers, so nothing is accepted
/// once one of them fired. A worker that stops early (closed input) does not
/// end the session; the loop keeps waiting for the deadline or a signal.
/// The receiver is dropped on return, which makes the worker's next send fail.
pub async fn collect_results<F>(
    mut answers: mpsc::Receiver<bool>,
    duration: Duration,
    interrupt: F,
) -> SessionOutcome
where
    F: Future<Output = Interruption>,
{
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);
    tokio::pin!(interrupt);

    let mut results = Vec::new();
    let mut worker_done = false;
    let end = loop {
        tokio::select! {
            biased;
            _ = &mut deadline => break SessionEnd::Deadline,
            signal = &mut interrupt => break SessionEnd::Interrupted(signal),
            answer = answers.recv(), if !worker_done => match answer {
                Some(correct) => results.push(correct),
                None => {
                    log::info!("Quiz worker stopped, waiting for the end of the session");
                    worker_done = true;
                }
            },
        }
    };

    SessionOutcome { results, end }
}

/// Run a whole drill session and finalize it.
///
/// The worker thread is detached and never joined: it may sit in a blocking
/// read when the session ends and stops with the process.
pub async fn run_session<R, I, O, F, W>(
    config: &QuizConfig,
    generator: QuestionGenerator<R>,
    console: Console<I, O>,
    interrupt: F,
    report: &mut W,
) -> Result<SessionSummary>
where
    R: Rng + Send + 'static,
    I: BufRead + Send + 'static,
    O: Write + Send + 'static,
    F: Future<Output = Interruption>,
    W: Write,
{
    let started = Instant::now();
    let date = Local::now().date_naive();

    let (answers_tx, answers_rx) = mpsc::channel(1);
    thread::Builder::new()
        .name("quiz".to_string())
        .spawn(move || run_quiz(generator, console, answers_tx))?;

    log::info!(
        "Session started: facts [{}] up to x{} for {:?}",
        config.facts.descriptor(),
        config.max_multiplier,
        config.duration
    );

    let outcome = collect_results(answers_rx, config.duration, interrupt).await;
    log::info!(
        "Session ended ({}) after {} answers",
        outcome.end,
        outcome.results.len()
    );

    finalize(report, &outcome.results, config, started.elapsed(), date)
}
