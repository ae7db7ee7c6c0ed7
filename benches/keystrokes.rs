//! Benchmarks for tag_field keystroke handling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use tag_field::{
    AcceptAll, Engine, InputEvent, Interaction, KeyCode, KeyEvent, TagField, TagFieldConfig,
};

fn sample_tags(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("tag-{i}")).collect()
}

/// Feed `word` one keystroke at a time, the way a text surface reports it.
fn type_word(engine: &mut Engine, word: &str) {
    let mut text = String::new();
    for ch in word.chars() {
        text.push(ch);
        black_box(engine.handle_event(&AcceptAll, InputEvent::TextChanged(text.clone())));
    }
}

fn benchmark_typing_with_commits(c: &mut Criterion) {
    c.bench_function("typing and comma commits", |b| {
        b.iter(|| {
            let mut engine = Engine::default();
            for word in ["alpha,", "beta,", "gamma,", "delta,", "epsilon,"] {
                type_word(&mut engine, word);
            }
            black_box(engine.tags().len());
        });
    });
}

fn benchmark_duplicate_check(c: &mut Criterion) {
    let config = TagFieldConfig::default().initial_tags(sample_tags(500));

    c.bench_function("duplicate check against 500 tags", |b| {
        b.iter(|| {
            let mut engine = Engine::new(config.clone());
            let notes = engine.handle_event(
                &AcceptAll,
                black_box(InputEvent::TextChanged("tag-499,".to_string())),
            );
            black_box(notes);
        });
    });
}

fn benchmark_backspace_reopen(c: &mut Criterion) {
    let config = TagFieldConfig::default().initial_tags(sample_tags(100));
    let backspace = InputEvent::Key(KeyEvent::plain(KeyCode::Backspace));

    c.bench_function("backspace reopen and recommit", |b| {
        b.iter(|| {
            let mut engine = Engine::new(config.clone());
            for _ in 0..10 {
                black_box(engine.handle_event(&AcceptAll, backspace.clone()));
                let text = engine.text().to_string();
                black_box(engine.add_tag(&AcceptAll, &text));
            }
        });
    });
}

fn benchmark_interaction_removal(c: &mut Criterion) {
    let config = TagFieldConfig::default().initial_tags(sample_tags(100));

    c.bench_function("remove tags by interaction", |b| {
        b.iter(|| {
            let mut engine = Engine::new(config.clone());
            while !engine.tags().is_empty() {
                black_box(engine.interact(0, Interaction::PRESS));
            }
        });
    });
}

fn benchmark_render(c: &mut Criterion) {
    let field = TagField::new(TagFieldConfig::default().initial_tags(sample_tags(200)));

    c.bench_function("compose 200 chips", |b| {
        b.iter(|| black_box(field.render()));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = benchmark_typing_with_commits,
              benchmark_duplicate_check,
              benchmark_backspace_reopen,
              benchmark_interaction_removal,
              benchmark_render
}
criterion_main!(benches);
