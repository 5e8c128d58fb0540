use std::cell::Cell;

use super::*;

#[test]
fn schedule_records_delay_until_fired() {
    let ran = Rc::new(Cell::new(0));
    let task = TimedTask::new();
    let counter = Rc::clone(&ran);
    task.schedule(300, move || counter.set(counter.get() + 1));

    assert_eq!(task.pending_delay(), Some(300));
    assert_eq!(ran.get(), 0);
    assert!(task.fire());
    assert_eq!(ran.get(), 1);
    assert_eq!(task.pending_delay(), None);
    assert!(!task.fire());
}

#[test]
fn rescheduling_replaces_pending_task() {
    let ran = Rc::new(Cell::new(""));
    let task = TimedTask::new();
    let first = Rc::clone(&ran);
    task.schedule(10, move || first.set("first"));
    let second = Rc::clone(&ran);
    task.schedule(300, move || second.set("second"));

    assert_eq!(task.pending_delay(), Some(300));
    assert!(task.fire());
    assert_eq!(ran.get(), "second");
}

#[test]
fn clones_share_the_slot() {
    let task = TimedTask::new();
    let handle = task.clone();
    handle.schedule(2000, || {});
    assert_eq!(task.pending_delay(), Some(2000));
}
