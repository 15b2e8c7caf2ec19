use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};
use std::path::Path;

/// Level used when `RUST_LOG` is not set; the quiz owns the terminal
pub const DEFAULT_LOG_SPEC: &str = "warn";

/// Start the logger. Logs go to rotated files in `log_dir` when given, stderr otherwise.
///
/// Keep the returned handle alive for the whole program.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(DEFAULT_LOG_SPEC)?;

    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("math_facts"))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start(),
        None => logger.format(flexi_logger::colored_default_format).start(),
    }
}
