//! Terminal UI example using crossterm and ratatui.
//!
//! Demonstrates wiring a tag field to a terminal text surface.
//! Run with: cargo run --example tui_crossterm
//! Engine logs go to `tag_field_demo.log` (filter with RUST_LOG).

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::sync::Mutex;
use tag_field::{
    Handlers, InputEvent, Interaction, KeyCode, KeyEvent, Modifiers, TagField, TagFieldConfig,
    TextEditSurface,
};
use tracing_subscriber::EnvFilter;

/// Single-line edit surface kept in sync with the field.
#[derive(Default)]
struct TerminalSurface {
    text: String,
    placeholder: Option<String>,
    visible: bool,
}

impl TextEditSurface for TerminalSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.placeholder = placeholder.map(str::to_string);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

struct App {
    field: TagField,
    surface: TerminalSurface,
    selected: Option<usize>,
    message: Rc<RefCell<String>>,
}

impl App {
    fn new() -> Self {
        let message = Rc::new(RefCell::new(String::from(
            "Type, end a tag with ','. Enter commits. Tab selects, Del removes.",
        )));
        let changed = message.clone();
        let rejected = message.clone();
        let pressed = message.clone();

        let handlers = Handlers::new()
            .on_tags_changed(move |tags| *changed.borrow_mut() = format!("tags: {tags:?}"))
            .on_add_rejected(move |text| {
                *rejected.borrow_mut() = format!("rejected {text:?}: one '@' per address")
            })
            .on_tag_interact(move |index, tag, _, deleted| {
                let verb = if deleted { "removed" } else { "pressed" };
                *pressed.borrow_mut() = format!("{verb} #{index} {tag:?}");
            });

        let field = TagField::builder()
            .config(
                TagFieldConfig::default()
                    .commit_on_submit(true)
                    .max_tags(6)
                    .placeholder("Add recipients...")
                    .initial_tags(["ann@example.com"]),
            )
            .handlers(handlers)
            .add_guard(|text: &str| text.matches('@').count() <= 1)
            .build();

        let mut app = Self {
            field,
            surface: TerminalSurface::default(),
            selected: None,
            message,
        };
        app.field.sync_surface(&mut app.surface);
        app
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        if let Some(input) = self.convert_crossterm_event(event) {
            self.field.handle_event(input);
        }
        self.field.sync_surface(&mut self.surface);
        self.selected = self
            .selected
            .filter(|&i| i < self.field.tags().len());
    }

    /// Map a terminal key to a field event, editing the surface text first
    /// where the surface itself would.
    fn convert_crossterm_event(&mut self, event: CKeyEvent) -> Option<InputEvent> {
        match event.code {
            CKeyCode::Char(c) if self.surface.visible => {
                let mut text = self.surface.text.clone();
                text.push(c);
                Some(InputEvent::TextChanged(text))
            }
            CKeyCode::Backspace if self.surface.visible => {
                if self.surface.text.is_empty() {
                    let mods = if event.modifiers.contains(KeyModifiers::SHIFT) {
                        Modifiers::SHIFT
                    } else {
                        Modifiers::empty()
                    };
                    return Some(InputEvent::Key(KeyEvent {
                        code: KeyCode::Backspace,
                        mods,
                    }));
                }
                let mut text = self.surface.text.clone();
                text.pop();
                Some(InputEvent::TextChanged(text))
            }
            CKeyCode::Enter if self.surface.visible => Some(InputEvent::Submit),
            CKeyCode::Tab => {
                let count = self.field.tags().len();
                self.selected = match (self.selected, count) {
                    (_, 0) => None,
                    (None, _) => Some(0),
                    (Some(i), n) => Some((i + 1) % n),
                };
                None
            }
            CKeyCode::Delete => self.selected.map(|index| InputEvent::Interact {
                index,
                interaction: Interaction::PRESS,
            }),
            _ => None,
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let view = app.field.render();
    let mut spans = vec![];
    for (i, chip) in view.tags.iter().enumerate() {
        let style = if app.selected == Some(i) {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(chip.to_string(), style));
        spans.push(Span::raw(" "));
    }

    let mut cursor = None;
    if app.surface.visible {
        let prefix: usize = spans.iter().map(|s| s.width()).sum();
        if app.surface.text.is_empty() {
            if let Some(placeholder) = &app.surface.placeholder {
                spans.push(Span::styled(
                    placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            cursor = Some(prefix);
        } else {
            spans.push(Span::raw(app.surface.text.clone()));
            cursor = Some(prefix + Span::raw(app.surface.text.as_str()).width());
        }
    }

    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("tag_field demo"),
    );
    f.render_widget(field, chunks[0]);

    let status = Paragraph::new(app.message.borrow().clone())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    if let Some(col) = cursor {
        f.set_cursor(chunks[0].x + 1 + col as u16, chunks[0].y + 1);
    }
}

fn main() -> Result<(), io::Error> {
    let log = File::create("tag_field_demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            if key.code == CKeyCode::Esc {
                break;
            }

            app.handle_crossterm_event(key);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
