//! CLI command definitions

use crate::application::ReportKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "timelog")]
#[command(about = "Reports over a plain-text time-tracking log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Report to print
    #[arg(value_enum, value_name = "REPORT")]
    pub report: Option<ReportKind>,

    /// Directory holding the log, synonym and config files
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Log file (default: data.txt, or data_file from timelog.toml)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Synonym file (default: syn.txt, or synonyms_file from timelog.toml)
    #[arg(long, value_name = "PATH")]
    pub synonyms: Option<PathBuf>,

    /// Category summarized by the work report
    #[arg(long, value_name = "NAME")]
    pub work_category: Option<String>,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default timelog.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
