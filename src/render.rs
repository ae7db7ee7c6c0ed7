use std::fmt;

use crate::config::TagFieldConfig;
use crate::traits::TagRenderer;
use crate::types::{TagState, TagView};

/// A simple labeled chip, the output of [`ChipRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub key: String,
    pub label: String,
    pub deletable: bool,
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deletable {
            write!(f, "[{} ×]", self.label)
        } else {
            write!(f, "[{}]", self.label)
        }
    }
}

/// The default rendering strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChipRenderer;

impl TagRenderer for ChipRenderer {
    type Output = Chip;

    fn render(&self, view: &TagView<'_>) -> Chip {
        Chip {
            key: view.key.clone(),
            label: view.tag.to_string(),
            deletable: view.deletable,
        }
    }
}

/// What the edit surface should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    /// Suppressed once any tag exists.
    pub placeholder: Option<String>,
}

/// The composed field: rendered tags, then the edit surface if offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<T> {
    pub tags: Vec<T>,
    pub input: Option<InputView>,
}

pub fn tag_views<'a>(state: &'a TagState, config: &TagFieldConfig) -> Vec<TagView<'a>> {
    let deletable = config.tags_deletable();
    state
        .tags
        .iter()
        .enumerate()
        .map(|(index, tag)| TagView {
            tag,
            index,
            key: format!("{tag}-{index}"),
            deletable,
        })
        .collect()
}

pub fn input_view(state: &TagState, config: &TagFieldConfig) -> Option<InputView> {
    if !config.surface_visible(state.tags.len()) {
        return None;
    }
    let placeholder = if state.tags.is_empty() {
        config.placeholder.clone()
    } else {
        None
    };
    Some(InputView {
        text: state.text.clone(),
        placeholder,
    })
}

pub fn compose<R: TagRenderer>(
    state: &TagState,
    config: &TagFieldConfig,
    renderer: &R,
) -> FieldView<R::Output> {
    FieldView {
        tags: tag_views(state, config)
            .iter()
            .map(|view| renderer.render(view))
            .collect(),
        input: input_view(state, config),
    }
}
