// Core app structure and command loop

mod eframe_impl;
mod helpers;

pub(crate) use helpers::section_heading;

use crate::api::{Credentials, ProjectApi};
use crate::config::{SliverhandConfig, save_cfg};
use crate::session::{Command, Session};
use tracing::{info, warn};

pub struct Sliverhand {
    pub session: Session,
    pub api: Box<dyn ProjectApi>,
    pub options: SliverhandConfig,
    /// Commands emitted by widgets during the current frame
    pub pending: Vec<Command>,
    /// Credentials panel buffers
    pub credentials_draft: Credentials,
}

impl Sliverhand {
    pub fn new(options: SliverhandConfig, api: Box<dyn ProjectApi>) -> Self {
        let mut session = Session::new(options.credentials.clone());
        session.dispatch(api.as_ref(), Command::CheckCredentials);

        Self {
            credentials_draft: options.credentials.clone(),
            session,
            api,
            options,
            pending: Vec::new(),
        }
    }

    pub fn queue(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Apply this frame's commands in order. Returns true when any ran.
    pub(crate) fn flush_commands(&mut self) -> bool {
        let commands = std::mem::take(&mut self.pending);
        if commands.is_empty() {
            return false;
        }
        for command in commands {
            self.session.dispatch(self.api.as_ref(), command);
        }
        true
    }

    /// Persist the credentials panel and re-check access
    pub(crate) fn save_credentials(&mut self) {
        let credentials = Credentials::new(
            self.credentials_draft.username.trim(),
            self.credentials_draft.api_key.trim(),
        );
        self.options.credentials = credentials.clone();
        match save_cfg(&self.options) {
            Ok(()) => info!(username = %credentials.username, "credentials saved"),
            Err(e) => {
                warn!(error = %e, "failed to save settings");
                self.session
                    .notify_error(format!("Could not save settings: {e}"));
            }
        }
        self.api.set_credentials(credentials.clone());
        self.session.credentials = credentials;
        self.queue(Command::CheckCredentials);
    }
}
