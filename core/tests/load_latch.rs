use std::cell::Cell;
use std::rc::Rc;

use coursesite_core::{Completion, LoadLatch, LoadState};

fn counting_hook(latch: &LoadLatch) -> Rc<Cell<u32>> {
    let calls = Rc::new(Cell::new(0));
    let calls_for_hook = calls.clone();
    latch.on_loaded(move || calls_for_hook.set(calls_for_hook.get() + 1));
    calls
}

#[test]
fn starts_loading_with_placeholder_visible() {
    let latch = LoadLatch::new();
    let state = latch.state();
    assert_eq!(state, LoadState::Loading);
    assert!(state.placeholder_visible());
    assert_eq!(state.content_opacity(), 0.0);
}

#[test]
fn completion_reveals_content() {
    let latch = LoadLatch::new();
    let calls = counting_hook(&latch);

    assert_eq!(latch.complete(), Completion::Transitioned);
    let state = latch.state();
    assert_eq!(state, LoadState::Loaded);
    assert!(!state.placeholder_visible());
    assert_eq!(state.content_opacity(), 1.0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn repeated_signals_fire_hook_once() {
    let latch = LoadLatch::new();
    let calls = counting_hook(&latch);

    assert_eq!(latch.complete(), Completion::Transitioned);
    assert_eq!(latch.complete(), Completion::AlreadyLoaded);
    assert_eq!(latch.complete(), Completion::AlreadyLoaded);
    assert_eq!(calls.get(), 1);
    assert!(!latch.state().placeholder_visible());
}

#[test]
fn signal_after_detach_is_ignored() {
    let latch = LoadLatch::new();
    let calls = counting_hook(&latch);
    let surface_callback = latch.clone();

    latch.detach();
    assert_eq!(surface_callback.complete(), Completion::Detached);
    assert_eq!(latch.state(), LoadState::Loading);
    assert_eq!(calls.get(), 0);
}

#[test]
fn hook_registered_after_signal_runs_immediately() {
    let latch = LoadLatch::new();
    latch.complete();
    let calls = counting_hook(&latch);
    assert_eq!(calls.get(), 1);
}

#[test]
fn hook_sees_loaded_state() {
    let latch = LoadLatch::new();
    let seen = Rc::new(Cell::new(LoadState::Loading));
    let seen_for_hook = seen.clone();
    let latch_for_hook = latch.clone();
    latch.on_loaded(move || seen_for_hook.set(latch_for_hook.state()));
    latch.complete();
    assert_eq!(seen.get(), LoadState::Loaded);
}

#[test]
fn separate_latches_are_independent() {
    let visible = LoadLatch::new();
    let hidden = LoadLatch::new();
    hidden.complete();
    assert_eq!(visible.state(), LoadState::Loading);
    assert_eq!(hidden.state(), LoadState::Loaded);
    assert_ne!(visible, hidden);
    assert_eq!(visible, visible.clone());
}
