//! A command-line tool that queries a cloud instance metadata service and prints the result as JSON.
//!
//! # Overview
//!
//! `imds-fetch` talks to the EC2-compatible instance metadata service exposed at the
//! well-known link-local address `169.254.169.254`. It either retrieves a single
//! metadata field, or lists every available top-level key and retrieves each one,
//! printing the aggregated record as indented JSON on standard output.
//!
//! # Basic Usage
//!
//! **Fetch every available metadata key:**
//! ```bash
//! imds-fetch
//! ```
//!
//! **Fetch a single key:**
//! ```bash
//! imds-fetch --key hostname
//! imds-fetch -k hostname  # Short form
//! ```
//!
//! **Point at a different metadata endpoint:**
//! ```bash
//! imds-fetch --endpoint http://127.0.0.1:8080/latest/meta-data
//! ```
//!
//! # Output
//!
//! The result is a flat JSON object, 4-space indented, one entry per retrieved key:
//!
//! ```json
//! {
//!     "hostname": "ip-10-0-0-12.ec2.internal",
//!     "instance-id": "i-0abc123def456"
//! }
//! ```
//!
//! Keys whose fetch fails at the network level are reported as `"Unavailable"`.
//! If the service itself cannot be reached for the initial listing, the output is
//! a single error record instead.

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use imds_fetch::Result;

mod commands;

use crate::commands::{QueryArgs, process_query};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "imds-fetch", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: QueryArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    process_query(&cli.args).await
}
