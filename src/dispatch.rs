use std::fmt;

use crate::types::{Interaction, Notification};

type TagsHandler = Box<dyn FnMut(&[String])>;
type TextHandler = Box<dyn FnMut(&str)>;
type InteractHandler = Box<dyn FnMut(usize, &str, Interaction, bool)>;

/// Optional observer slots.
///
/// An empty slot swallows its notifications; it never changes how the
/// engine transitions.
#[derive(Default)]
pub struct Handlers {
    on_tags_changed: Option<TagsHandler>,
    on_text_changed: Option<TextHandler>,
    on_add_rejected: Option<TextHandler>,
    on_tag_interact: Option<InteractHandler>,
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_tags_changed", &self.on_tags_changed.is_some())
            .field("on_text_changed", &self.on_text_changed.is_some())
            .field("on_add_rejected", &self.on_add_rejected.is_some())
            .field("on_tag_interact", &self.on_tag_interact.is_some())
            .finish()
    }
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tags_changed(mut self, f: impl FnMut(&[String]) + 'static) -> Self {
        self.on_tags_changed = Some(Box::new(f));
        self
    }

    pub fn on_text_changed(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_text_changed = Some(Box::new(f));
        self
    }

    pub fn on_add_rejected(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_add_rejected = Some(Box::new(f));
        self
    }

    /// `f(index, tag, interaction, deleted)`.
    pub fn on_tag_interact(
        mut self,
        f: impl FnMut(usize, &str, Interaction, bool) + 'static,
    ) -> Self {
        self.on_tag_interact = Some(Box::new(f));
        self
    }

    /// Deliver notifications in order.
    pub fn dispatch(&mut self, notifications: Vec<Notification>) {
        for notification in notifications {
            self.deliver(notification);
        }
    }

    fn deliver(&mut self, notification: Notification) {
        match notification {
            Notification::TagsChanged(tags) => {
                if let Some(f) = self.on_tags_changed.as_mut() {
                    f(tags.as_slice());
                }
            }
            Notification::TextChanged(text) => {
                if let Some(f) = self.on_text_changed.as_mut() {
                    f(text.as_str());
                }
            }
            Notification::AddRejected(text) => {
                if let Some(f) = self.on_add_rejected.as_mut() {
                    f(text.as_str());
                }
            }
            Notification::TagInteracted {
                index,
                tag,
                interaction,
                deleted,
            } => {
                if let Some(f) = self.on_tag_interact.as_mut() {
                    f(index, tag.as_str(), interaction, deleted);
                }
            }
        }
    }
}
