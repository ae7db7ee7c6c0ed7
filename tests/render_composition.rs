use tag_field::{
    Chip, InputView, TagField, TagFieldConfig, TagRenderer, TagState, TagView,
};
mod support;
use support::mock_surface::MockSurface;
use support::recorder::{Recorder, tags};

struct Upper;

impl TagRenderer for Upper {
    type Output = String;

    fn render(&self, view: &TagView<'_>) -> String {
        format!("{}:{}", view.index, view.tag.to_uppercase())
    }
}

#[test]
fn default_renderer_builds_chips() {
    let field = TagField::new(TagFieldConfig::default().initial_tags(["a", "b"]));

    let view = field.render();

    assert_eq!(
        view.tags,
        vec![
            Chip {
                key: "a-0".into(),
                label: "a".into(),
                deletable: true,
            },
            Chip {
                key: "b-1".into(),
                label: "b".into(),
                deletable: true,
            },
        ]
    );
    assert_eq!(view.tags[0].to_string(), "[a ×]");
}

#[test]
fn renderer_is_swappable() {
    let field = TagField::builder()
        .config(TagFieldConfig::default().initial_tags(["rust", "go"]))
        .renderer(Upper)
        .build();

    assert_eq!(field.render().tags, vec!["0:RUST".to_string(), "1:GO".to_string()]);
}

#[test]
fn placeholder_only_without_tags() {
    let mut field = TagField::new(
        TagFieldConfig::default()
            .placeholder("Add a recipient")
            .commit_on_submit(true),
    );

    assert_eq!(
        field.render().input,
        Some(InputView {
            text: String::new(),
            placeholder: Some("Add a recipient".into()),
        })
    );

    field.add_tag("ann@example.com");
    assert_eq!(
        field.render().input,
        Some(InputView {
            text: String::new(),
            placeholder: None,
        })
    );
}

#[test]
fn read_only_hides_surface_and_locks_chips() {
    let field = TagField::new(
        TagFieldConfig::default()
            .initial_tags(["a"])
            .read_only(true),
    );

    let view = field.render();

    assert!(view.input.is_none());
    assert!(!view.tags[0].deletable);
    assert_eq!(view.tags[0].to_string(), "[a]");
}

#[test]
fn surface_hidden_at_cap() {
    let mut field = TagField::new(TagFieldConfig::default().max_tags(2));

    field.add_tag("a");
    assert!(field.render().input.is_some());

    field.add_tag("b");
    assert!(field.render().input.is_none());

    field.remove_tag_at(0);
    assert!(field.render().input.is_some());
}

#[test]
fn zero_cap_never_offers_surface() {
    let field = TagField::new(TagFieldConfig::default().max_tags(0));
    assert!(field.render().input.is_none());
}

#[test]
fn sync_pushes_state_to_surface() {
    let mut field = TagField::new(
        TagFieldConfig::default()
            .placeholder("Tags")
            .max_tags(1),
    );
    let mut surface = MockSurface::new();

    field.on_text_changed("wip");
    field.sync_surface(&mut surface);
    assert!(surface.visible);
    assert_eq!(surface.text, "wip");
    assert_eq!(surface.placeholder.as_deref(), Some("Tags"));

    field.on_text_changed("wip,");
    field.sync_surface(&mut surface);
    assert!(!surface.visible);
}

#[test]
fn props_replace_state_wholesale() {
    let rec = Recorder::new();
    let mut field = TagField::builder()
        .config(TagFieldConfig::default().initial_tags(["old"]))
        .handlers(rec.handlers())
        .build();
    field.on_text_changed("typing");
    rec.take();

    field.set_props(
        TagFieldConfig::default()
            .initial_tags(["x", "y"])
            .initial_text("z")
            .read_only(true),
    );

    assert_eq!(
        field.snapshot(),
        TagState::new(tags(&["x", "y"]), "z")
    );
    assert!(field.config().read_only);
    assert!(rec.take().is_empty());

    field.set_props(TagFieldConfig::default());
    assert!(field.tags().is_empty());
    assert_eq!(field.text(), "");
}
