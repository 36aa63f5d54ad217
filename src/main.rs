mod api;
mod cli_messages;
mod config;
mod consts;
mod currency;
mod dates;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod model;
mod session;
#[cfg(test)]
mod test_support;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the finances dashboard
    Start {
        /// Base URL of the transactions API, e.g. http://localhost:3333
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the dashboard once instead of opening the interactive UI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Remember the API base URL for future runs
    SetApiUrl {
        /// Base URL of the transactions API
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            headless,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)
                .map_err(|e| format!("Failed to load config: {}", e))?;
            let session = setup_session(config, api_url)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::SetApiUrl { url } => {
            if url.parse::<Environment>().is_err() {
                print_cmd_error!(
                    "Invalid API URL",
                    "The URL must start with http:// or https://"
                );
                return Err(Box::from(format!("Invalid API URL: {}", url)));
            }
            // An unreadable config file is replaced rather than blocking the fix
            let mut config = Config::load_from_file(&config_path)
                .unwrap_or_else(|_| Config::new(url.clone()));
            config.api_url = Some(url.clone());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("API URL saved", "{}", url);
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting", "Removing {}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
