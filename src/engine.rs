use tracing::{debug, trace, warn};

use crate::config::{CapPolicy, TagFieldConfig};
use crate::key::{InputEvent, KeyCode, KeyEvent};
use crate::traits::AddGuard;
use crate::types::{Interaction, Notification, TagState};

/// The tag/text state machine.
///
/// Every operation applies its state change first and then returns the
/// notifications describing the new state. Callers deliver them afterwards,
/// so an observer never sees a pre-update sequence.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: TagState,
    config: TagFieldConfig,
}

impl Engine {
    pub fn new(config: TagFieldConfig) -> Self {
        Self {
            state: TagState::new(config.initial_tags.clone(), config.initial_text.clone()),
            config,
        }
    }

    pub fn config(&self) -> &TagFieldConfig {
        &self.config
    }

    pub fn state(&self) -> &TagState {
        &self.state
    }

    pub fn tags(&self) -> &[String] {
        &self.state.tags
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn snapshot(&self) -> TagState {
        self.state.clone()
    }

    pub fn handle_event<G: AddGuard + ?Sized>(
        &mut self,
        guard: &G,
        input: InputEvent,
    ) -> Vec<Notification> {
        trace!(?input, "tag field event");
        match input {
            InputEvent::TextChanged(text) => self.on_text_changed(guard, text),
            InputEvent::Key(key) => self.on_key_press(key),
            InputEvent::Submit => self.submit(guard),
            InputEvent::Interact { index, interaction } => self.interact(index, interaction),
        }
    }

    /// Handle the full surface content after a change.
    ///
    /// A trailing delimiter commits the preceding text, unless that text
    /// (trimmed) is already a tag; then the raw text is kept as the buffer.
    pub fn on_text_changed<G: AddGuard + ?Sized>(
        &mut self,
        guard: &G,
        text: String,
    ) -> Vec<Notification> {
        if let Some(candidate) = self.delimited_candidate(&text) {
            return self.add_tag(guard, candidate);
        }
        self.state.text.clone_from(&text);
        vec![Notification::TextChanged(text)]
    }

    /// The text before a trailing delimiter, if `text` should commit.
    ///
    /// Only the final char is compared, so a multi-char or empty delimiter
    /// never matches.
    fn delimited_candidate<'t>(&self, text: &'t str) -> Option<&'t str> {
        let (last_idx, _) = text.char_indices().next_back()?;
        if last_idx == 0 || !self.config.is_delimiter(&text[last_idx..]) {
            return None;
        }
        let candidate = &text[..last_idx];
        if self.state.contains(candidate.trim()) {
            return None;
        }
        Some(candidate)
    }

    /// Commit `text` as a new tag.
    ///
    /// Whitespace-only text is dropped without notice. The guard sees the
    /// untrimmed text; the stored tag is trimmed.
    pub fn add_tag<G: AddGuard + ?Sized>(&mut self, guard: &G, text: &str) -> Vec<Notification> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![];
        }

        let capped = self.config.cap_policy == CapPolicy::Enforce
            && !self.config.below_cap(self.state.tags.len());
        if capped || !guard.allows(text) {
            debug!(text, capped, "tag rejected");
            return vec![Notification::AddRejected(text.to_string())];
        }

        self.state.tags.push(trimmed.to_string());
        self.state.text.clear();
        debug!(tag = trimmed, count = self.state.tags.len(), "tag committed");
        vec![Notification::TagsChanged(self.state.tags.clone())]
    }

    /// Backspace on an empty buffer pops the last tag back into the buffer.
    pub fn on_key_press(&mut self, key: KeyEvent) -> Vec<Notification> {
        if key.code != KeyCode::Backspace || !self.state.text.is_empty() {
            return vec![];
        }
        let Some(tag) = self.state.tags.pop() else {
            return vec![];
        };

        debug!(tag = %tag, "tag reopened for editing");
        self.state.text = tag;
        vec![
            Notification::TagsChanged(self.state.tags.clone()),
            Notification::TextChanged(self.state.text.clone()),
        ]
    }

    pub fn submit<G: AddGuard + ?Sized>(&mut self, guard: &G) -> Vec<Notification> {
        if !self.config.commit_on_submit {
            return vec![];
        }
        let text = self.state.text.clone();
        self.add_tag(guard, &text)
    }

    /// An interaction on the tag at `index`.
    ///
    /// Removes the tag when deletion is enabled and the field is writable;
    /// otherwise only reports the interaction. Later indices shift down by one
    /// after a removal.
    pub fn interact(&mut self, index: usize, interaction: Interaction) -> Vec<Notification> {
        let Some(tag) = self.state.tags.get(index).cloned() else {
            warn!(index, count = self.state.tags.len(), "interaction on missing tag");
            return vec![];
        };

        if !self.config.tags_deletable() {
            return vec![Notification::TagInteracted {
                index,
                tag,
                interaction,
                deleted: false,
            }];
        }

        self.state.tags.remove(index);
        debug!(index, tag = %tag, "tag removed");
        vec![
            Notification::TagsChanged(self.state.tags.clone()),
            Notification::TagInteracted {
                index,
                tag,
                interaction,
                deleted: true,
            },
        ]
    }

    pub fn remove_tag_at(&mut self, index: usize) -> Vec<Notification> {
        self.interact(index, Interaction::PRESS)
    }

    /// Replace config and state wholesale from new host props.
    ///
    /// Nothing from the previous state survives and nothing is notified.
    pub fn reset(&mut self, config: TagFieldConfig) {
        debug!(
            tags = config.initial_tags.len(),
            "tag field reset from props"
        );
        *self = Self::new(config);
    }
}
