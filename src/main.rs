// main.rs - timed multiplication drill
use clap::Parser;
use math_facts::config::{FactSet, QuizConfig, DEFAULT_DURATION_MINUTES, DEFAULT_LOG_PATH};
use math_facts::{logging, run_session, Console, QuestionGenerator, ShutdownSignals};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "math_facts", version, about)]
struct Config {
    /// Highest multiple, usually 10, 11, or 12
    #[arg(short = 'm', long)]
    max: u32,

    /// Duration of the test in minutes
    #[arg(short = 'd', long, default_value_t = DEFAULT_DURATION_MINUTES)]
    duration: u64,

    /// Location to store test results
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    csv: PathBuf,

    /// Drill a single fact instead of a list
    #[arg(short = 'f', long, conflicts_with = "facts")]
    fact: Option<u32>,

    /// Facts to drill, 1 through 12 when omitted
    facts: Vec<u32>,

    /// Seed for a reproducible sequence of questions
    #[arg(long)]
    seed: Option<u64>,

    /// Keep previous questions on screen
    #[arg(long, default_value_t = false)]
    no_clear: bool,

    /// Write logs to rotated files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Config {
    fn quiz_config(&self) -> math_facts::Result<QuizConfig> {
        let facts = match self.fact {
            Some(fact) => FactSet::single(fact)?,
            None if self.facts.is_empty() => FactSet::default(),
            None => FactSet::new(self.facts.clone())?,
        };

        QuizConfig::new(
            facts,
            self.max,
            QuizConfig::minutes(self.duration),
            &self.csv,
        )
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    let _logger = match logging::setup_logging(config.log_dir.as_deref()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("error: cannot start logger: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Drill aborted: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Everything is validated before the quiz thread starts
    let quiz_config = config.quiz_config()?;
    let mut signals = ShutdownSignals::install()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let generator = QuestionGenerator::new(&quiz_config, rng);

    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout());
    if config.no_clear {
        console = console.without_clearing();
    }

    let summary = run_session(
        &quiz_config,
        generator,
        console,
        signals.recv(),
        &mut io::stdout(),
    )
    .await?;

    log::info!(
        "Saved {}/{} to {}",
        summary.correct,
        summary.total,
        quiz_config.log_path.display()
    );
    Ok(())
}
