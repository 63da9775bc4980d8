//! Inbox messages: bug reports and fan mail.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub subject: String,
    pub body: String,
    /// Simulated week the message arrived.
    pub week: u64,
    /// The game this message is about, if any.
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub is_bug: bool,
    #[serde(default)]
    pub is_read: bool,
}

impl Message {
    pub fn bug_report(subject: String, body: String, week: u64, game_name: String) -> Self {
        Self {
            sender: "A disappointed player".to_string(),
            subject,
            body,
            week,
            game_name: Some(game_name),
            is_bug: true,
            is_read: false,
        }
    }

    pub fn fan_praise(subject: String, body: String, week: u64, game_name: String) -> Self {
        Self {
            sender: "Fan".to_string(),
            subject,
            body,
            week,
            game_name: Some(game_name),
            is_bug: false,
            is_read: false,
        }
    }
}
