//! CLI for the URLazy URL builder.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use urlazy_core::config;

use commands::{run_build, run_parse};

/// Top-level CLI for URLazy.
#[derive(Debug, Parser)]
#[command(name = "urlazy")]
#[command(about = "URLazy: build and parse URLs incrementally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Assemble a URL from parts and print it.
    Build(BuildArgs),

    /// Split a URL into its components and print them.
    Parse {
        /// URL to split.
        url: String,

        /// Print the components as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Parts for `urlazy build`. Applied in declaration order; repeated
/// `--path`, `--query` and `--fragment` values accumulate.
#[derive(Debug, Default, Args)]
pub struct BuildArgs {
    /// Start from this URL instead of an empty one.
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// Scheme, e.g. https.
    #[arg(long)]
    pub scheme: Option<String>,

    /// Authority token; replaces credentials, host and port.
    #[arg(long, value_name = "USER:PASS@HOST:PORT")]
    pub authority: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<String>,

    /// Path segment to append (one segment per flag).
    #[arg(long = "path", value_name = "SEGMENT", allow_hyphen_values = true)]
    pub paths: Vec<String>,

    /// Query string to append, e.g. `a=1&b=2`.
    #[arg(long = "query", value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Fragment text to append.
    #[arg(long = "fragment", value_name = "TEXT", allow_hyphen_values = true)]
    pub fragments: Vec<String>,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build(args) => run_build(&args, &cfg)?,
            CliCommand::Parse { url, json } => run_parse(&url, json, &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
