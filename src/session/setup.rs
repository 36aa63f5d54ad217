//! Session setup and initialization

use crate::api::{ApiClient, TransactionsApi};
use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::dates::DateStyle;
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::EventSender;
use log::debug;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// The client every dashboard activation fetches through
    pub api: Arc<dyn TransactionsApi>,
    /// Sender handed to loaders for activity events
    pub event_sender: EventSender,
    /// Event receiver for loader events
    pub event_receiver: mpsc::Receiver<Event>,
    /// How transaction dates are written
    pub date_style: DateStyle,
}

impl SessionData {
    /// Base URL of the API this session talks to.
    pub fn api_url(&self) -> String {
        self.api.environment().api_url()
    }
}

/// Picks the API location: the `--api-url` flag, then the config file, then
/// `FINANCES_ENVIRONMENT`.
pub fn resolve_environment(
    api_url_flag: Option<String>,
    config: &Config,
    from_env: Environment,
) -> Result<Environment, Box<dyn Error>> {
    match api_url_flag.or_else(|| config.api_url.clone()) {
        Some(url) => url
            .parse::<Environment>()
            .map_err(|_| Box::<dyn Error>::from(format!("Invalid API URL: {}", url))),
        None => Ok(from_env),
    }
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Resolves where the API lives
/// 2. Builds the HTTP client
/// 3. Creates the activity event channel
///
/// # Arguments
/// * `config` - Configuration loaded from disk (or defaults)
/// * `api_url_flag` - Base URL given on the command line, if any
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub fn setup_session(
    config: Config,
    api_url_flag: Option<String>,
) -> Result<SessionData, Box<dyn Error>> {
    let environment = resolve_environment(api_url_flag, &config, Environment::from_env())?;
    debug!("Using {:?}", environment);

    let api: Arc<dyn TransactionsApi> = Arc::new(ApiClient::new(environment)?);
    let date_style = DateStyle::resolve(config.date_locale.as_deref());

    let (sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    Ok(SessionData {
        api,
        event_sender: EventSender::new(sender),
        event_receiver,
        date_style,
    })
}
