use clap::Parser;
use timelog::application::{init, ReportKind, RunOptions, RunReportsService};
use timelog::cli::{format_diagnostic, format_rows, Cli, Commands};
use timelog::error::TimelogError;
use timelog::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "off" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), TimelogError> {
    if let Some(Commands::Init { path }) = cli.command {
        return init::init(&path);
    }

    let repo = match cli.dir {
        Some(dir) => FileSystemRepository::new(dir),
        None => FileSystemRepository::discover()?,
    };
    let service = RunReportsService::new(repo);

    let parsed = service.prepare(RunOptions {
        data_file: cli.data,
        synonyms_file: cli.synonyms,
        work_category: cli.work_category,
    })?;

    // Skipped lines go to stderr so stdout holds only report rows
    for diagnostic in parsed.diagnostics() {
        eprintln!("{}", format_diagnostic(diagnostic));
    }

    let run = parsed.load()?;

    let kind = cli.report.unwrap_or(ReportKind::All);
    let headed = kind == ReportKind::Every;
    for report in kind.expand() {
        if headed {
            println!("== {} ==", report.title());
        }
        print!("{}", format_rows(&run.rows(report)));
    }

    Ok(())
}
