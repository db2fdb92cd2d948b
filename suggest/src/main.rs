use std::{
    env,
    fs::{self, File},
    path::PathBuf,
    process::ExitCode,
    sync::{Arc, Mutex},
};

use suggest_core::{
    config::{self, Settings},
    HttpSource, StaticSource, SuggestionSource,
};
use tracing_subscriber::EnvFilter;
use ui::app::App;

const LOG_FILE: &str = "suggest.log";

fn main() -> ExitCode {
    let (settings, config_error) = match Settings::load() {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    let log_path = init_logging(&settings);
    if let Some(e) = config_error {
        eprintln!("Ignoring invalid config: {}", e);
        tracing::warn!("config rejected, using defaults: {e}");
    }

    // An initial query may be passed on the command line.
    let initial: Option<String> = {
        let args: Vec<String> = env::args().skip(1).collect();
        (!args.is_empty()).then(|| args.join(" "))
    };

    let source = build_source(&settings);
    let mut app = App::new(source, &settings);
    if let Some(query) = initial {
        app.seed_query(&query);
    }
    tracing::info!(endpoint = %settings.endpoint, offline = settings.offline, "starting");

    match app.run() {
        Ok(Some(choice)) => {
            println!("{}", choice);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("terminal error: {e}");
            eprintln!("suggest: {}", e);
            if let Some(path) = log_path {
                eprintln!("see {}", path.display());
            }
            ExitCode::FAILURE
        }
    }
}

fn build_source(settings: &Settings) -> Arc<dyn SuggestionSource> {
    if settings.offline {
        tracing::info!("offline mode: serving bundled products");
        return Arc::new(StaticSource);
    }
    match HttpSource::new(settings) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            eprintln!("Cannot reach {}: {}; using bundled products", settings.endpoint, e);
            tracing::warn!(endpoint = %settings.endpoint, "http source unavailable: {e}");
            Arc::new(StaticSource)
        }
    }
}

/// Log to a file under the data directory; the terminal belongs to the UI.
fn init_logging(settings: &Settings) -> Option<PathBuf> {
    let dir = config::data_root()?;
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path).ok()?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Some(path)
}
