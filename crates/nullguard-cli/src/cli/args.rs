use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nullguard",
    version,
    about = "Reports null fields in JSON documents, over HTTP or from the command line"
)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t, env = "NULLGUARD_LOG_FORMAT")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP validation service
    Serve(ServeArgs),
    /// Check a single JSON document
    Check(CheckArgs),
    /// Print the nullguard version
    Version,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// YAML config file (bind, body_limit_bytes, max_depth, optional_fields)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Path exempt from the null check; repeatable
    #[arg(long = "optional", value_name = "PATH")]
    pub optional: Vec<String>,

    /// Maximum nesting depth, 0 disables the limit
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Maximum request body size in bytes
    #[arg(long)]
    pub body_limit: Option<usize>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// JSON document to check; `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Path exempt from the null check; repeatable
    #[arg(long = "optional", value_name = "PATH")]
    pub optional: Vec<String>,

    /// YAML or JSON list of optional paths
    #[arg(long)]
    pub optional_file: Option<PathBuf>,

    /// Pretty-print the result
    #[arg(long, default_value = "false")]
    pub pretty: bool,
}
