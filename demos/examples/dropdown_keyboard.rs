// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-only use of a dropdown.
//!
//! Opens from the trigger with ArrowUp, walks the items past a disabled one,
//! and activates with Enter.
//!
//! Run:
//! - `cargo run -p perch_demos --example dropdown_keyboard`

use kurbo::Rect;
use perch_overlay::{Dropdown, DropdownOptions, DropdownTrigger, ItemConfig, Key};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let enabled = ItemConfig::default();
    let disabled = ItemConfig {
        disabled: true,
        ..ItemConfig::default()
    };
    let mut dropdown = Dropdown::with_items(
        DropdownOptions::default(),
        [enabled, disabled, enabled, enabled],
    );
    let mut trigger = DropdownTrigger::new();
    trigger.layout(&mut dropdown, Rect::new(20.0, 20.0, 120.0, 44.0));

    let update = trigger.key(&mut dropdown, Key::ArrowUp);
    let (open, active) = (update.snapshot.is_open, update.snapshot.active_item);
    println!("== ArrowUp on trigger ==\n  open={open} active={active:?}");
    assert_eq!(update.snapshot.active_item, Some(3));

    let walk = [
        Key::ArrowUp,
        Key::ArrowUp,
        Key::ArrowUp,
        Key::Home,
        Key::ArrowDown,
    ];
    let mut visited = Vec::new();
    for key in walk {
        let update = dropdown.key(key);
        visited.push(update.snapshot.active_item);
    }
    println!("== Walk ==\n  {:?}", visited);
    // Index 1 is disabled and the list does not wrap.
    assert_eq!(visited, [Some(2), Some(0), Some(0), Some(0), Some(2)]);

    let update = dropdown.key(Key::Enter);
    println!("== Enter ==\n  {:?}", update.events);
    assert_eq!(update.selected(), Some(2));
    assert!(!update.snapshot.is_open);

    // Tab away from an open menu closes it like navigation.
    trigger.key(&mut dropdown, Key::Enter);
    let update = dropdown.key(Key::Tab);
    assert!(!update.snapshot.is_open);
}
