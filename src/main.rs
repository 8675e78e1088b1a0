//! Teetime - A terminal poller for golf tee time availability.
//!
//! This is the main entry point for Teetime, which watches the booking widget
//! API of a golf club and rings when tee times matching a form become available.
//!
//! # Overview
//!
//! The user fills a small form (number of players, day and time window) by
//! typing commands on stdin. Submitting the form with `check` fetches the
//! course schedule at once, then again every polling interval. Each fetch
//! prints the tee times with enough free places inside the window, and plays
//! a sound when there is at least one.
//!
//! # Features
//!
//! - **Form Commands**: `players`, `date`, `from`, `to`, `check`, `stop`, `mute`, `show`
//! - **Periodic Polling**: One repeating timer at most, restarted on each `check`
//! - **Sound Notification**: Terminal bell, or any player command
//! - **Stale Response Guard**: A slow response never replaces a newer one
//! - **YAML Configuration**: Optional configuration file with environment variable support
//!
//! # Configuration
//!
//! Every setting has a default. A `config.yaml` file can override them:
//!
//! ```yaml
//! api:
//!   url: "https://prd-sgf-widget-api.azurewebsites.net"
//!   club_id: "71d046c5-1016-4b88-9347-eade7d50d2b7"
//!   course_id: "0f1334d7-88dc-444d-bd14-1a5a19ea5aa6"
//!   polling_interval: 300
//!
//! form:
//!   players: 2
//!   from: "08:00"
//!   to: "12:00"
//!
//! sound:
//!   muted: false
//!   command: ["paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"]
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `TEETIME_` prefix:
//!
//! ```bash
//! export TEETIME_API__COURSE_ID="0f1334d7-88dc-444d-bd14-1a5a19ea5aa6"
//! export TEETIME_API__POLLING_INTERVAL=120
//! export TEETIME_SOUND__MUTED=true
//! ```
//!
//! # Usage
//!
//! ```bash
//! teetime --players 2 --date 2026-10-20 --from 08:00 --to 12:00 --check
//! ```
//!
//! # Architecture
//!
//! - [`app`] - Interactive loop over stdin lines and poller updates
//! - [`commands`] - Form command parsing, execution and text formatting
//! - [`config`] - Configuration structures and loading
//! - [`poller`] - Availability poller, form validation and match filter
//! - [`schedule`] - Widget API client and schedule data structures
//! - [`sound`] - Notification sound
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` for verbose output
//!   - Set to `warn` or `error` for minimal logging

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{app::App, config::Config};

mod app;
mod commands;
mod config;
mod poller;
mod schedule;
mod sound;

/// Command-line arguments for Teetime.
///
/// Form values given here take precedence over the `form` section of the
/// configuration file.
///
/// # Examples
///
/// ```bash
/// teetime --config config.yaml --players 3 --check
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an optional YAML configuration file.
    ///
    /// See the [`config`] module for the expected format.
    #[arg(short, long)]
    config: Option<String>,

    /// Number of players, from 1 to 4.
    #[arg(short, long)]
    players: Option<u8>,

    /// Day to look at, `yyyy-MM-dd`. Today when absent.
    #[arg(short, long)]
    date: Option<String>,

    /// Earliest tee time, `HH:MM` on a 10 minutes step.
    #[arg(long)]
    from: Option<String>,

    /// Latest tee time, `HH:MM` on a 10 minutes step.
    #[arg(long)]
    to: Option<String>,

    /// Start with the sound muted.
    #[arg(short, long)]
    muted: bool,

    /// Submit the form on startup.
    #[arg(long)]
    check: bool,
}

/// Main entry point for Teetime.
///
/// 1. **Logging Setup**: Configures the logger with `info` level by default
///    (can be overridden with the `RUST_LOG` environment variable)
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Merges defaults, the optional YAML file and
///    `TEETIME_` environment variables
/// 4. **Form Loop**: Reads commands from stdin until `quit` or end of input
///
/// Configuration and form errors are logged and end the process early.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug teetime --check
/// ```
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting teetime {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return;
        }
    };

    let mut app = match App::new(&config, &args) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize form: {}", e);
            return;
        }
    };

    let lines = BufReader::new(tokio::io::stdin()).lines();
    app.start(lines, args.check).await;
}
