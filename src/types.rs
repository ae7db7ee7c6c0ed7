use crate::key::Modifiers;

/// The owned state of one tag field: committed tags plus the edit buffer.
///
/// Display order is `tags` order. Tags are stored trimmed and never empty
/// when they come in through [`crate::Engine::add_tag`]; a reset may seed
/// anything the host hands over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagState {
    /// Committed tags, in insertion order.
    pub tags: Vec<String>,
    /// The in-progress, not yet committed text.
    pub text: String,
}

impl TagState {
    pub fn new(tags: Vec<String>, text: impl Into<String>) -> Self {
        Self {
            tags,
            text: text.into(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// How a rendered tag was interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionKind {
    #[default]
    Press,
    LongPress,
}

/// The host's interaction event, passed through untouched to
/// [`Notification::TagInteracted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub mods: Modifiers,
}

impl Interaction {
    pub const PRESS: Interaction = Interaction {
        kind: InteractionKind::Press,
        mods: Modifiers::empty(),
    };
}

/// Notification intents emitted by the engine for the host to deliver.
///
/// Every intent is built from the state *after* the transition that produced
/// it was applied. Intents with no bound handler are dropped by
/// [`crate::Handlers::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The full tag sequence after a mutation.
    TagsChanged(Vec<String>),
    /// Raw buffer text after a non-commit change, or after a re-open.
    TextChanged(String),
    /// Candidate text refused by the add-guard (or by an enforced cap).
    AddRejected(String),
    /// A tag was interacted with. `deleted` tells whether it was removed.
    TagInteracted {
        index: usize,
        tag: String,
        interaction: Interaction,
        deleted: bool,
    },
}

/// Descriptor handed to a [`crate::TagRenderer`] for one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView<'a> {
    /// The tag text.
    pub tag: &'a str,
    /// Position in the tag sequence. Feed it back through
    /// [`crate::InputEvent::Interact`] to act on this tag.
    pub index: usize,
    /// Stable identity for host-side diffing: `"{tag}-{index}"`.
    pub key: String,
    /// Whether an interaction removes this tag.
    pub deletable: bool,
}
