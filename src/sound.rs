//! Notification sound played when matching tee times show up.
//!
//! The default cue is the terminal bell. A sound player command can be
//! configured instead (for example `paplay /usr/share/sounds/complete.oga`);
//! it is spawned and left to finish on its own.

use std::{
    io::{self, Write},
    process::Stdio,
};

use log::{debug, warn};
use mockall::automock;
use tokio::process::Command;

use crate::config::SoundConfig;

/// Plays the notification cue.
///
/// This trait abstracts the audio output for easier testing with mocks.
#[automock]
pub trait Notifier: Send + Sync {
    /// Plays the cue once, without waiting for it to finish.
    fn notify(&self);
}

/// Notification sound owned by the poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sound {
    /// Rings the terminal bell
    Bell,
    /// Runs an external player
    Command {
        /// Program to run
        program: String,
        /// Arguments given to the program
        args: Vec<String>,
    },
}

impl Sound {
    /// Builds the sound from its configuration.
    ///
    /// An empty or missing command falls back to the terminal bell.
    pub fn from_config(config: &SoundConfig) -> Self {
        match config.command.as_deref() {
            Some([program, args @ ..]) if !program.is_empty() => Sound::Command {
                program: program.to_owned(),
                args: args.to_vec(),
            },
            _ => Sound::Bell,
        }
    }

    fn ring_bell(&self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            warn!("unable to ring the terminal bell: {}", e);
        }
    }

    fn run_player(&self, program: &str, args: &[String]) {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(e) => {
                warn!("unable to start sound player {}: {}", program, e);
                return;
            }
        };

        let program = program.to_owned();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!("sound player {} finished", program),
                Ok(status) => warn!("sound player {} exited with {}", program, status),
                Err(e) => warn!("sound player {} failed: {}", program, e),
            }
        });
    }
}

impl Notifier for Sound {
    fn notify(&self) {
        debug!("playing notification sound {:?}", self);
        match self {
            Sound::Bell => self.ring_bell(),
            Sound::Command { program, args } => self.run_player(program, args),
        }
    }
}
