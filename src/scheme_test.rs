use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording_callback() -> (SchemeCallback, Rc<RefCell<Vec<bool>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let callback: SchemeCallback = Box::new(move |dark| sink.borrow_mut().push(dark));
    (callback, seen)
}

#[test]
fn initial_value_is_observable() {
    assert!(!FixedScheme::new(false).prefers_dark());
    assert!(FixedScheme::new(true).prefers_dark());
}

#[test]
fn default_reads_as_light() {
    assert!(!FixedScheme::default().prefers_dark());
}

#[test]
fn set_updates_the_value_and_notifies() {
    let scheme = FixedScheme::new(false);
    let (callback, seen) = recording_callback();
    let subscription = scheme.subscribe(callback);
    scheme.set(true);
    assert!(scheme.prefers_dark());
    assert_eq!(*seen.borrow(), vec![true]);
    subscription.dispose();
}

#[test]
fn setting_the_same_value_does_not_notify() {
    let scheme = FixedScheme::new(true);
    let (callback, seen) = recording_callback();
    let subscription = scheme.subscribe(callback);
    scheme.set(true);
    assert!(seen.borrow().is_empty());
    subscription.dispose();
}

#[test]
fn disposed_subscription_stops_notifications() {
    let scheme = FixedScheme::new(false);
    let (callback, seen) = recording_callback();
    scheme.subscribe(callback).dispose();
    scheme.set(true);
    assert!(seen.borrow().is_empty());
}

#[test]
fn clones_share_the_same_signal() {
    let scheme = FixedScheme::new(false);
    let observer = scheme.clone();
    scheme.set(true);
    assert!(observer.prefers_dark());
}
