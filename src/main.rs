mod config;
mod mode;
mod template;

use config::ProviderConfig;
use mode::Mode;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Value of a `--name=value` flag, if given.
fn flag_value(prefix: &str) -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(prefix).map(str::to_string))
}

fn has_flag(flag: &str) -> bool {
    env::args().skip(1).any(|arg| arg == flag)
}

/// Explicit `--config=` path, or whatever discovery finds in the
/// current directory.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = flag_value("--config=") {
        return Some(PathBuf::from(path));
    }
    mode::discover(".")
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    match env::args().nth(1).as_deref() {
        Some("init") => cmd_init(),
        Some("check") => cmd_check(),
        Some("show") => cmd_show(),
        None => cmd_mode(),
        Some(other) => {
            eprintln!("unknown command: {} (expected init, check or show)", other);
            ExitCode::FAILURE
        }
    }
}

/// Write the config template for the operator to fill in.
fn cmd_init() -> ExitCode {
    let path = flag_value("--path=").unwrap_or_else(|| template::TEMPLATE_FILE_NAME.to_string());
    let force = has_flag("--force");

    match template::write_template(&path, force) {
        Ok(()) => {
            info!("Fill the values, then rename the file to `firebase-config.yaml`");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to write template");
            ExitCode::FAILURE
        }
    }
}

/// Load and validate the provider config, reporting what is wrong.
fn cmd_check() -> ExitCode {
    let Some(path) = config_path() else {
        error!(
            "No provider config file found (looked for {})",
            mode::CONFIG_FILE_NAMES.join(", ")
        );
        return ExitCode::FAILURE;
    };

    match ProviderConfig::load(&path) {
        Ok(_) => {
            info!(config = %path.display(), "Provider config is valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(config = %path.display(), error = %e, "Provider config check failed");
            ExitCode::FAILURE
        }
    }
}

/// Print the detected mode and the redacted record.
fn cmd_show() -> ExitCode {
    println!("mode: {}", Mode::detect("."));

    let Some(path) = config_path() else {
        return ExitCode::SUCCESS;
    };

    match ProviderConfig::load(&path) {
        Ok(config) => {
            println!("{}", config.redacted());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(config = %path.display(), error = %e, "Failed to load provider config");
            ExitCode::FAILURE
        }
    }
}

/// Default command: report the mode implied by the current directory.
fn cmd_mode() -> ExitCode {
    match mode::discover(".") {
        Some(path) => info!(config = %path.display(), "Provider config detected"),
        None => info!("No provider config present; running offline"),
    }

    println!("{}", Mode::detect("."));
    ExitCode::SUCCESS
}
