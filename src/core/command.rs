//! Combatant-command tagging for news items, using the same ordered
//! keyword-table approach as location classification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Command {
    Indopacom,
    Centcom,
    Southcom,
    Eucom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRule {
    pub command: Command,
    pub keywords: Vec<String>,
}

impl CommandRule {
    pub fn new(command: Command, keywords: &[&str]) -> Self {
        Self {
            command,
            keywords: keywords.iter().map(|k| k.to_uppercase()).collect(),
        }
    }
}

pub const DEPLOYMENT_KEYWORDS: &[&str] = &["deploy", "deploys", "deployed", "deployment"];

pub fn default_command_rules() -> Vec<CommandRule> {
    vec![
        CommandRule::new(
            Command::Indopacom,
            &["INDOPACOM", "U.S. Indo-Pacific Command", "Indo-Pacific Command"],
        ),
        CommandRule::new(
            Command::Centcom,
            &["CENTCOM", "U.S. Central Command", "Central Command"],
        ),
        CommandRule::new(
            Command::Southcom,
            &["SOUTHCOM", "U.S. Southern Command", "Southern Command"],
        ),
        CommandRule::new(
            Command::Eucom,
            &["EUCOM", "U.S. European Command", "European Command"],
        ),
    ]
}

/// Commands mentioned in `text`, each once, in rule order.
pub fn detect_commands(text: &str, rules: &[CommandRule]) -> Vec<Command> {
    if text.is_empty() {
        return Vec::new();
    }

    let upper = text.to_uppercase();
    let mut detected = Vec::new();
    for rule in rules {
        if !detected.contains(&rule.command)
            && rule.keywords.iter().any(|k| upper.contains(k.as_str()))
        {
            detected.push(rule.command);
        }
    }
    detected
}

pub fn detect_deployment(text: &str) -> bool {
    let lower = text.to_lowercase();
    DEPLOYMENT_KEYWORDS.iter().any(|k| lower.contains(k))
}
