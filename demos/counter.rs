//! Counter With History
//!
//! This example wraps a plain counter reducer with undo, redo and grouping.
//!
//! Key concepts:
//! - The caller's reducer stays untouched
//! - Undo replays history from the start, redo folds forward
//! - Groups are undone and redone as a single step
//! - Selectors rebuild past and future states on demand
//!
//! Run with: cargo run --example counter

use undox::builder::UndoxBuilder;
use undox::core::Action;
use undox::Store;

#[derive(Clone, Debug, PartialEq)]
enum Counter {
    Init,
    Increment,
    Decrement,
    Highlight(bool),
}

impl Action for Counter {
    fn action_type(&self) -> &str {
        match self {
            Self::Init => "undox/INIT",
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::Highlight(_) => "HIGHLIGHT",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct View {
    count: i32,
    highlighted: bool,
}

fn counter(state: Option<&View>, action: &Counter) -> View {
    let mut view = state.cloned().unwrap_or_default();
    match action {
        Counter::Init => {}
        Counter::Increment => view.count += 1,
        Counter::Decrement => view.count -= 1,
        Counter::Highlight(on) => view.highlighted = *on,
    }
    view
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Counter With History Example ===\n");

    let undox = UndoxBuilder::new(counter as fn(Option<&View>, &Counter) -> View)
        .init_action(Counter::Init)
        .ignore("HIGHLIGHT")
        .build()?;
    let mut store = Store::new(undox);

    store.dispatch(Counter::Increment);
    store.dispatch(Counter::Increment);
    store.dispatch(Counter::Decrement);
    println!(
        "After +1 +1 -1: count = {}, index = {}",
        store.present().count,
        store.state().index()
    );

    store.undo(2)?;
    println!(
        "After undo(2):  count = {}, index = {}",
        store.present().count,
        store.state().index()
    );

    store.redo(1)?;
    println!(
        "After redo(1):  count = {}, index = {}",
        store.present().count,
        store.state().index()
    );

    store.group(vec![Counter::Increment, Counter::Increment])?;
    println!(
        "After group:    count = {}, index = {}",
        store.present().count,
        store.state().index()
    );

    store.dispatch(Counter::Highlight(true));
    println!(
        "Highlight is ignored by history: index = {}, highlighted = {}",
        store.state().index(),
        store.present().highlighted
    );

    store.undo(1)?;
    let selectors = store.selectors();
    let past: Vec<i32> = selectors
        .past_states(store.state())
        .iter()
        .map(|view| view.count)
        .collect();
    let future: Vec<i32> = selectors
        .future_states(store.state())
        .iter()
        .map(|view| view.count)
        .collect();
    println!("\nPast counts:   {past:?}");
    println!("Present count: {}", store.present().count);
    println!("Future counts: {future:?}");

    println!("\n=== Example Complete ===");
    Ok(())
}
