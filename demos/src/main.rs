// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless indexable list walkthrough.
//!
//! Builds a word list with one section per letter, drags a finger down the
//! index bar, and prints what the overlays draw after each step.
//!
//! Run:
//! - `cargo run -p indexable_demos`
//! - `RUST_LOG=debug cargo run -p indexable_demos` to see the controller's events

use indexable_demos::{FixedRowList, SAMPLE_TEXT, sample_items};
use indexable_list::IndexableList;
use indexable_paint::{DrawOp, MonospaceMeasurer};
use indexable_scroller::{IndexBarConfig, TouchEvent};
use indexable_sections::SectionedItems;
use indexable_sticky::TextHeaderPainter;
use kurbo::Size;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let size = Size::new(360.0, 640.0);
    let items = sample_items(SAMPLE_TEXT);
    let host = FixedRowList::new(items.len(), 48.0, size);
    let config = IndexBarConfig::for_density(2.0, 2.0);

    let mut list = IndexableList::new(host, config, MonospaceMeasurer::default());
    list.on_size_changed(size);
    list.set_adapter(SectionedItems::new(items));
    list.set_sticky_headers(TextHeaderPainter::new(56.0, MonospaceMeasurer::default()));

    tracing::info!(
        rows = list.host().count(),
        sections = list.scroller().sections().len(),
        "list ready"
    );
    println!("Sections: {}", list.scroller().sections().join(" "));
    let Some(bar) = list.scroller().layout().map(|layout| layout.rect) else {
        println!("No sections, nothing to drag over.");
        return;
    };
    println!("Index bar: {bar:?}");

    let x = bar.center().x;
    let steps = 6;
    let mut gesture = vec![TouchEvent::down((x, bar.y0 + 1.0))];
    for step in 1..=steps {
        let y = bar.y0 + bar.height() * f64::from(step) / f64::from(steps);
        gesture.push(TouchEvent::moved((x, y)));
    }
    gesture.push(TouchEvent::up((x, bar.y1)));
    // A plain drag on the content, away from the bar.
    gesture.push(TouchEvent::down((40.0, 400.0)));
    gesture.push(TouchEvent::moved((40.0, 250.0)));
    gesture.push(TouchEvent::up((40.0, 250.0)));

    for event in &gesture {
        let was_dragging = list.scroller().drag_state().is_dragging();
        list.on_touch_event(event);
        let owner = if was_dragging || list.scroller().drag_state().is_dragging() {
            "index bar"
        } else {
            "list"
        };
        println!(
            "\n{:?} at ({:.0}, {:.0}) -> {owner}, scroll offset {}, section {:?}",
            event.phase,
            event.position.x,
            event.position.y,
            list.host().scroll(),
            list.scroller().current_section_label(),
        );
        print_frame(&list);
    }
}

fn print_frame(list: &IndexableList<FixedRowList, SectionedItems, MonospaceMeasurer>) {
    let mut ops: Vec<DrawOp> = Vec::new();
    if let Err(err) = list.draw(&mut ops) {
        println!("  draw failed: {err}");
        return;
    }
    for op in &ops {
        match op {
            DrawOp::Text { text, origin, .. } => {
                println!("  text {text:?} at ({:.1}, {:.1})", origin.x, origin.y);
            }
            other => println!("  {other:?}"),
        }
    }
}
