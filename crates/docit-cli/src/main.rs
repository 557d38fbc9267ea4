use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use docit_core::logic::commands::help_text;
use docit_core::{JsonStorage, LogicManager, RecordStore, Storage, UserPrefs};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "docit", version, about = "Clinic record manager for patients and appointments")]
struct Cli {
    /// Data file holding patients and appointments
    #[arg(long, env = "DOCIT_DATA")]
    data: Option<PathBuf>,

    /// User preferences file
    #[arg(long, default_value = "preferences.json")]
    prefs: PathBuf,

    /// Log filter, e.g. `debug` or `docit_core=trace`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let prefs = UserPrefs::load(&cli.prefs)
        .with_context(|| format!("failed to read preferences from {}", cli.prefs.display()))?;

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&prefs.log_level));
    if let Some(level) = &cli.log_level {
        logger.parse_filters(level);
    }
    logger.init();

    let data_file = cli.data.unwrap_or(prefs.data_file);
    info!(
        "event=app_start module=cli status=ok version={} data_file={}",
        env!("CARGO_PKG_VERSION"),
        data_file.display()
    );

    let storage = JsonStorage::new(&data_file);
    let mut logic = match storage.load_store() {
        Ok(store) => LogicManager::new(store, storage),
        Err(e) => {
            warn!(
                "event=store_load module=cli status=error fallback=empty data_file={} error={}",
                data_file.display(),
                e
            );
            LogicManager::new(RecordStore::new(), storage)
        }
    };

    run(&mut logic)
}

fn run<S: Storage>(logic: &mut LogicManager<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_lists(logic, &mut stdout)?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                writeln!(stdout, "{}", result.feedback)?;
                if result.show_help {
                    writeln!(stdout, "\n{}\n", help_text())?;
                }
                if result.exit {
                    break;
                }
                print_lists(logic, &mut stdout)?;
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }

    info!("event=app_exit module=cli status=ok");
    Ok(())
}

fn print_lists<S: Storage>(logic: &LogicManager<S>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Patients:")?;
    for (i, patient) in logic.filtered_patients().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, patient)?;
    }
    writeln!(out, "Appointments:")?;
    for (i, appointment) in logic.filtered_appointments().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, appointment)?;
    }
    Ok(())
}
