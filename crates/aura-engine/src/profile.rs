//! Static user profile and the greeting derived from it.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Prompts offered on the greeting screen.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "Generate a creative story",
    "Analyze this image",
    "Help me write code",
    "Explain a complex topic",
];

/// Shown under the greeting headline.
pub const GREETING_SUBTITLE: &str = "How can I assist you today?";

/// Display-only profile shown in the sidebar footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full display name.
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_email")]
    pub email: String,

    /// Avatar image location. Terminals can't draw it; kept for completeness.
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
}

fn default_name() -> String {
    "John Doe".into()
}

fn default_email() -> String {
    "john.doe@example.com".into()
}

fn default_avatar_url() -> String {
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop".into()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            avatar_url: default_avatar_url(),
        }
    }
}

impl UserProfile {
    /// First word of the name, used in the greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("there")
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Greeting for an hour of the day (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Greeting for the current local time.
pub fn current_greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.first_name(), "John");
        assert_eq!(profile.initials(), "JD");
        assert_eq!(profile.email, "john.doe@example.com");
    }

    #[test]
    fn test_initials_edge_cases() {
        let mut profile = UserProfile::default();
        profile.name = "ada".into();
        assert_eq!(profile.initials(), "A");

        profile.name = "   ".into();
        assert_eq!(profile.initials(), "");
        assert_eq!(profile.first_name(), "there");

        profile.name = "Grace Brewster Hopper".into();
        assert_eq!(profile.initials(), "GB");
    }

    #[test]
    fn test_profile_partial_json_uses_defaults() {
        let profile: UserProfile = serde_json::from_str(r#"{"name":"Jane Roe"}"#).unwrap();
        assert_eq!(profile.name, "Jane Roe");
        assert_eq!(profile.email, "john.doe@example.com");
    }
}
