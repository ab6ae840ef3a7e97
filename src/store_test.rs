use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording_callback() -> (StoreCallback, Rc<RefCell<Vec<Option<String>>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let callback: StoreCallback = Box::new(move |value| sink.borrow_mut().push(value));
    (callback, seen)
}

// =============================================================
// Load / save
// =============================================================

#[test]
fn empty_store_loads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.load(), None);
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::new();
    store.save("dark");
    assert_eq!(store.load(), Some("dark".to_owned()));
}

#[test]
fn save_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.save("light");
    store.save("auto");
    assert_eq!(store.load(), Some("auto".to_owned()));
}

#[test]
fn clones_share_the_same_cell() {
    let store = MemoryStore::new();
    let other_tab = store.clone();
    other_tab.save("dark");
    assert_eq!(store.load(), Some("dark".to_owned()));
}

// =============================================================
// Change notifications
// =============================================================

#[test]
fn same_context_save_does_not_notify() {
    let store = MemoryStore::new();
    let (callback, seen) = recording_callback();
    let subscription = store.subscribe(callback);
    store.save("dark");
    assert!(seen.borrow().is_empty());
    subscription.dispose();
}

#[test]
fn external_write_notifies_with_the_new_value() {
    let store = MemoryStore::new();
    let (callback, seen) = recording_callback();
    let subscription = store.subscribe(callback);
    store.set_external(Some("dark"));
    assert_eq!(*seen.borrow(), vec![Some("dark".to_owned())]);
    assert_eq!(store.load(), Some("dark".to_owned()));
    subscription.dispose();
}

#[test]
fn external_removal_notifies_with_none() {
    let store = MemoryStore::new();
    store.save("light");
    let (callback, seen) = recording_callback();
    let subscription = store.subscribe(callback);
    store.set_external(None);
    assert_eq!(*seen.borrow(), vec![None]);
    assert_eq!(store.load(), None);
    subscription.dispose();
}

#[test]
fn every_subscriber_hears_an_external_write() {
    let store = MemoryStore::new();
    let (first, first_seen) = recording_callback();
    let (second, second_seen) = recording_callback();
    let first_sub = store.subscribe(first);
    let second_sub = store.subscribe(second);
    store.set_external(Some("auto"));
    assert_eq!(first_seen.borrow().len(), 1);
    assert_eq!(second_seen.borrow().len(), 1);
    first_sub.dispose();
    second_sub.dispose();
}

#[test]
fn disposed_subscription_stops_notifications() {
    let store = MemoryStore::new();
    let (callback, seen) = recording_callback();
    store.subscribe(callback).dispose();
    store.set_external(Some("dark"));
    assert!(seen.borrow().is_empty());
}

#[test]
fn forgotten_subscription_keeps_notifying() {
    let store = MemoryStore::new();
    let (callback, seen) = recording_callback();
    store.subscribe(callback).forget();
    store.set_external(Some("dark"));
    store.set_external(Some("light"));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn callbacks_may_read_the_store() {
    let store = MemoryStore::new();
    let reader = store.clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(Box::new(move |_value| {
        sink.borrow_mut().push(reader.load());
    }));
    store.set_external(Some("dark"));
    assert_eq!(*seen.borrow(), vec![Some("dark".to_owned())]);
    subscription.dispose();
}
