use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tag field config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How `max_tags` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapPolicy {
    /// The cap only hides the edit surface. `add_tag` itself never refuses on
    /// count, so a programmatic add can go past the cap.
    #[default]
    DisplayOnly,
    /// Additionally refuse `add_tag` once the cap is reached, reported as an
    /// add rejection.
    Enforce,
}

/// Data options for a tag field.
///
/// Callbacks are not data; they live in [`crate::Handlers`]. Every field has a
/// default, so a partial JSON document is a valid config:
///
/// ```
/// let cfg = tag_field::TagFieldConfig::from_json(r#"{ "max_tags": 3 }"#).unwrap();
/// assert_eq!(cfg.max_tags, Some(3));
/// assert_eq!(cfg.commit_delimiters, vec![",".to_string(), String::new()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagFieldConfig {
    /// Seed for the tag sequence on mount and on reset.
    pub initial_tags: Vec<String>,
    /// Seed for the edit buffer on mount and on reset.
    pub initial_text: String,
    /// Trailing single-char triggers that commit the buffer. Matched literally.
    pub commit_delimiters: Vec<String>,
    /// Commit the buffer on the surface's submit signal.
    pub commit_on_submit: bool,
    pub read_only: bool,
    /// Remove a tag when it is interacted with.
    pub delete_on_interaction: bool,
    /// Upper bound for edit surface availability. `None` is unbounded.
    pub max_tags: Option<usize>,
    pub cap_policy: CapPolicy,
    /// Prompt shown in the empty edit surface while there are no tags.
    pub placeholder: Option<String>,
}

impl Default for TagFieldConfig {
    fn default() -> Self {
        Self {
            initial_tags: Vec::new(),
            initial_text: String::new(),
            commit_delimiters: vec![",".to_string(), String::new()],
            commit_on_submit: false,
            read_only: false,
            delete_on_interaction: true,
            max_tags: None,
            cap_policy: CapPolicy::DisplayOnly,
            placeholder: None,
        }
    }
}

impl TagFieldConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_delimiter(&self, tail: &str) -> bool {
        self.commit_delimiters.iter().any(|d| d == tail)
    }

    /// Whether an interaction on a tag removes it.
    pub fn tags_deletable(&self) -> bool {
        self.delete_on_interaction && !self.read_only
    }

    pub fn below_cap(&self, count: usize) -> bool {
        self.max_tags.is_none_or(|max| count < max)
    }

    /// Whether the edit surface is offered for a field holding `count` tags.
    pub fn surface_visible(&self, count: usize) -> bool {
        !self.read_only && self.below_cap(count)
    }

    // Fluent setters

    pub fn initial_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    pub fn commit_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commit_delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    pub fn commit_on_submit(mut self, on: bool) -> Self {
        self.commit_on_submit = on;
        self
    }

    pub fn read_only(mut self, on: bool) -> Self {
        self.read_only = on;
        self
    }

    pub fn delete_on_interaction(mut self, on: bool) -> Self {
        self.delete_on_interaction = on;
        self
    }

    pub fn max_tags(mut self, max: usize) -> Self {
        self.max_tags = Some(max);
        self
    }

    pub fn cap_policy(mut self, policy: CapPolicy) -> Self {
        self.cap_policy = policy;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
