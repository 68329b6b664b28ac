// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dropdown driven through its whole lifecycle.
//!
//! Lays out the trigger, opens the menu, measures it, hovers and clicks an
//! item, then lets the exit transition finish and unmount the menu.
//!
//! Run:
//! - `cargo run -p perch_demos --example dropdown_basics`
//! - `RUST_LOG=trace cargo run -p perch_demos --example dropdown_basics`

use kurbo::{Point, Rect, Size};
use perch_overlay::{
    DisclosureEvent, Dropdown, DropdownItem, DropdownMenu, DropdownOptions, DropdownTrigger,
    ItemConfig, ItemState, Layer, MenuRender, PortalLayer,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut portal = PortalLayer::new();
    let mut dropdown = Dropdown::with_items(
        DropdownOptions::default(),
        [
            ItemConfig::default(),
            ItemConfig::default(),
            ItemConfig {
                disabled: true,
                ..ItemConfig::default()
            },
        ],
    );
    let mut trigger = DropdownTrigger::new();
    let mut menu = DropdownMenu::new();
    let count = dropdown.items().len();
    let items: Vec<_> = (0..count).map(DropdownItem::new).collect();

    let anchor = Rect::from_origin_size((100.0, 50.0), (80.0, 30.0));
    trigger.layout(&mut dropdown, anchor);

    // First open: the menu has never been measured.
    let update = trigger.activate(&mut dropdown);
    let render = menu.sync(&update.snapshot, &mut portal);
    println!("== Open ==\n  {:?}\n  {:?}", update.events, render);
    let MenuRender::Measuring { layer } = render else {
        unreachable!("first open renders a measuring pass")
    };
    assert_eq!(layer, Layer::Portal(menu.slot().unwrap()));

    let update = menu.measured(&mut dropdown, Size::new(192.0, 120.0));
    let MenuRender::Visible(frame) = menu.sync(&update.snapshot, &mut portal) else {
        unreachable!("measured menu is visible")
    };
    println!("== Measured ==\n  {:?}", frame);
    assert_eq!(frame.placement.coordinates, Point::new(100.0, 80.0));
    assert_eq!(frame.rounded.class_name(), "ac-rounded-[4px]");

    items[1].pointer_enter(&mut dropdown);
    items[2].pointer_enter(&mut dropdown);
    let cx = dropdown.context();
    let states: Vec<_> = items.iter().map(|item| item.state(&cx)).collect();
    println!("== Hover ==\n  {:?}", states);
    assert_eq!(
        states,
        [ItemState::Idle, ItemState::Active, ItemState::Disabled]
    );

    let update = items[1].click(&mut dropdown);
    println!("== Click ==\n  {:?}", update.events);
    assert_eq!(update.selected(), Some(1));
    assert!(!update.snapshot.is_open);
    assert!(matches!(
        menu.sync(&update.snapshot, &mut portal),
        MenuRender::Visible(frame) if frame.closing
    ));

    // The host's timer fires after the exit transition.
    let timer = update.grace_timer().unwrap();
    println!("== Grace window ==\n  {:?}", timer.delay());
    let update = dropdown.grace_elapsed(timer);
    assert!(update.contains(DisclosureEvent::Unmounted));
    assert_eq!(menu.sync(&update.snapshot, &mut portal), MenuRender::Hidden);
    assert!(portal.is_empty());
}
