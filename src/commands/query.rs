//! The single query command: fetch one metadata key, or discover and fetch them all.

use clap::Args;
use clap::ValueEnum;
use imds_fetch::Result;
use imds_fetch::metadata::{self, Client};

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Arguments for querying the instance metadata service
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Metadata key to retrieve individually [default: discover and fetch every key]
    #[arg(long, short = 'k', value_name = "KEY")]
    pub key: Option<String>,

    /// Base URL of the instance metadata service
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Run a metadata query and print the resulting record as indented JSON.
pub async fn process_query(args: &QueryArgs) -> Result<()> {
    init_logging(args.log_level);

    let client = Client::new(args.endpoint.as_deref())?;

    let record = match &args.key {
        Some(key) => client.fetch_key(key).await?,
        None => client.discover().await?,
    };

    println!("{}", metadata::to_pretty_json(&record)?);

    Ok(())
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    if log_level == LogLevel::None {
        return;
    }

    let level = match log_level {
        LogLevel::None => return, // Already checked above, but being explicit
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
        .init();
}
