//! Application layer - Use cases and orchestration

pub mod init;
pub mod run_reports;

pub use run_reports::{
    ParsedRun, ReportKind, ReportRows, ReportRun, RunOptions, RunReportsService,
};
