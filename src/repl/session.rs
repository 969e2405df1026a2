//! Chef session state for the interactive front-end
//!
//! Tracks whether the chef is logged in plus simple session counters.
//! The credential check is a hardcoded comparison that gates the menu
//! commands; it is not a security boundary.

use std::time::{SystemTime, UNIX_EPOCH};

/// Built-in chef account
pub const CHEF_USERNAME: &str = "chef";
pub const CHEF_PASSWORD: &str = "1234";

/// Check a username/password pair against the built-in chef account
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == CHEF_USERNAME && password == CHEF_PASSWORD
}

/// Interactive session state
pub struct ChefSession {
    /// Whether the chef has logged in
    logged_in: bool,

    /// Session start time (unix seconds)
    session_start: u64,

    /// Commands executed this session
    commands_run: usize,
}

impl ChefSession {
    /// Create a new logged-out session
    pub fn new() -> Self {
        let session_start = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        ChefSession {
            logged_in: false,
            session_start,
            commands_run: 0,
        }
    }

    /// Attempt a login; returns whether the credentials matched
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if verify_credentials(username, password) {
            self.logged_in = true;
        }
        self.logged_in
    }

    /// Log the chef out
    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    /// Whether menu commands are currently available
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Count an executed command
    pub fn record_command(&mut self) {
        self.commands_run += 1;
    }

    /// Commands executed so far
    pub fn command_count(&self) -> usize {
        self.commands_run
    }

    /// Seconds since the session started
    pub fn session_duration(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        now.saturating_sub(self.session_start)
    }
}

impl Default for ChefSession {
    fn default() -> Self {
        Self::new()
    }
}
