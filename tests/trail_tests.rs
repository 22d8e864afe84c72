// Host-side tests for trail placement and lifecycle bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod trail {
    include!("../src/trail.rs");
}

use glam::DVec2;
use std::cell::Cell;
use std::rc::Rc;
use trail::*;

/// Stand-in element that counts how often it was taken out of the document.
#[derive(Clone, Default)]
struct CountingNode(Rc<Cell<u32>>);

impl CountingNode {
    fn detached(&self) -> u32 {
        self.0.get()
    }
}

impl TrailNode for CountingNode {
    fn detach(&self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn spot_is_centered_on_the_frame() {
    let spot = TrailSpot::at(100, 80, DVec2::new(40.0, 40.0));
    assert_eq!(spot.offset, DVec2::new(80.0, 60.0));
    assert_eq!(spot.style_attr(), "--x: 80px; --y: 60px");
}

#[test]
fn spot_uses_width_and_height_independently() {
    let spot = TrailSpot::at(10, 10, DVec2::new(200.0, 5.0));
    assert_eq!(spot.offset, DVec2::new(-90.0, 7.5));
    assert_eq!(spot.style_attr(), "--x: -90px; --y: 7.5px");
}

#[test]
fn spot_follows_current_frame_size() {
    let small = TrailSpot::at(50, 50, DVec2::new(20.0, 20.0));
    let large = TrailSpot::at(50, 50, DVec2::new(100.0, 60.0));
    assert_eq!(small.offset, DVec2::new(40.0, 40.0));
    assert_eq!(large.offset, DVec2::new(0.0, 20.0));
}

#[test]
fn ledger_detaches_each_element_once() {
    let mut ledger = TrailLedger::default();
    let node = CountingNode::default();
    let id = ledger.spawn(node.clone());
    assert_eq!(ledger.live(), 1);
    assert_eq!(node.detached(), 0);

    assert!(ledger.complete(id));
    assert_eq!(node.detached(), 1);
    assert_eq!(ledger.live(), 0);

    // A repeated completion signal changes nothing
    assert!(!ledger.complete(id));
    assert_eq!(node.detached(), 1);
}

#[test]
fn ledger_ids_are_unique_and_independent() {
    let mut ledger = TrailLedger::default();
    let nodes: Vec<CountingNode> = (0..5).map(|_| CountingNode::default()).collect();
    let ids: Vec<TrailId> = nodes.iter().map(|n| ledger.spawn(n.clone())).collect();
    assert_eq!(ledger.live(), 5);
    for (i, a) in ids.iter().enumerate() {
        assert!(ids[i + 1..].iter().all(|b| b != a));
    }

    // Completion order is arbitrary
    assert!(ledger.complete(ids[3]));
    assert!(ledger.complete(ids[0]));
    assert_eq!(ledger.live(), 3);
    let detached: Vec<u32> = nodes.iter().map(|n| n.detached()).collect();
    assert_eq!(detached, vec![1, 0, 0, 1, 0]);

    for id in &ids {
        ledger.complete(*id);
    }
    assert_eq!(ledger.live(), 0);
    assert!(nodes.iter().all(|n| n.detached() == 1));
}

#[test]
fn elements_stay_until_their_animation_ends() {
    let mut ledger = TrailLedger::default();
    let first = CountingNode::default();
    let second = CountingNode::default();
    ledger.spawn(first.clone());
    let second_id = ledger.spawn(second.clone());
    assert!(ledger.complete(second_id));
    // No signal for `first` yet
    assert_eq!(first.detached(), 0);
    assert_eq!(second.detached(), 1);
    assert_eq!(ledger.live(), 1);
}

#[test]
fn single_move_scenario_leaves_no_elements() {
    let mut ledger = TrailLedger::default();
    let spot = TrailSpot::at(100, 80, DVec2::new(40.0, 40.0));
    assert_eq!(spot.offset, DVec2::new(80.0, 60.0));
    let node = CountingNode::default();
    let id = ledger.spawn(node.clone());
    assert_eq!(ledger.live(), 1);
    ledger.complete(id);
    assert_eq!(ledger.live(), 0);
    assert_eq!(node.detached(), 1);
}
