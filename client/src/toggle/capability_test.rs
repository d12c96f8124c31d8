use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn counting_subscription() -> (Subscription, Rc<Cell<u32>>) {
    let released = Rc::new(Cell::new(0));
    let counter = Rc::clone(&released);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    (sub, released)
}

#[test]
fn drop_releases_subscription() {
    let (sub, released) = counting_subscription();
    assert!(sub.is_active());
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn explicit_release_runs_once() {
    let (mut sub, released) = counting_subscription();
    sub.release();
    sub.release();
    assert!(!sub.is_active());
    drop(sub);
    assert_eq!(released.get(), 1);
}

#[test]
fn capability_debug_names_variant() {
    assert_eq!(format!("{:?}", TransitionCapability::Immediate), "Immediate");
}
