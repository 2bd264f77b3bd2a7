mod support;

use embassy_futures::block_on;
use life_common::{Mode, Switch, Taps, Waiter};
use support::{RecordingSleep, ScriptedSwitches};

#[test]
fn test_zero_wait_polls_once() {
    let mut waiter = Waiter::new(ScriptedSwitches::default(), RecordingSleep::default());
    block_on(waiter.wait(0));
    assert_eq!(waiter.switches().polls, 1);
    assert!(waiter.sleep().slices.is_empty());
}

#[test]
fn test_wait_is_sliced() {
    let mut waiter = Waiter::new(ScriptedSwitches::default(), RecordingSleep::default());
    block_on(waiter.wait(120));
    assert_eq!(waiter.sleep().slices, [50, 50, 20]);
    // One poll before every slice plus the final one
    assert_eq!(waiter.switches().polls, 4);
}

#[test]
fn test_wait_exact_slice() {
    let mut waiter = Waiter::new(ScriptedSwitches::default(), RecordingSleep::default());
    block_on(waiter.wait(50));
    assert_eq!(waiter.sleep().slices, [50]);
    assert_eq!(waiter.switches().polls, 2);
}

#[test]
fn test_tap_during_wait_is_applied() {
    let switches = ScriptedSwitches::after(2, Taps::single(Switch::Step));
    let mut waiter = Waiter::new(switches, RecordingSleep::default());
    block_on(waiter.wait(200));
    assert_eq!(waiter.interaction().mode(), Mode::Step);
    assert!(waiter.interaction().pending_advance());
    // The wait still runs to completion
    assert_eq!(waiter.sleep().total_ms(), 200);
}

#[test]
fn test_pending_advance_passes_immediately() {
    let switches = ScriptedSwitches::new([Taps::single(Switch::Step)]);
    let mut waiter = Waiter::new(switches, RecordingSleep::default());
    waiter.poll();

    block_on(waiter.wait_for_advance());
    assert!(waiter.sleep().slices.is_empty());
    assert!(!waiter.interaction().pending_advance());
    assert_eq!(waiter.interaction().mode(), Mode::Step);
}

#[test]
fn test_step_mode_blocks_until_tap() {
    let step = Taps::single(Switch::Step);
    let switches = ScriptedSwitches::new([step, Taps::NONE, Taps::NONE, Taps::NONE, step]);
    let mut waiter = Waiter::new(switches, RecordingSleep::default());
    waiter.poll();
    block_on(waiter.wait_for_advance());

    block_on(waiter.wait_for_advance());
    assert_eq!(waiter.sleep().slices, [10, 10]);
    assert_eq!(waiter.switches().polls, 5);
    assert!(!waiter.interaction().pending_advance());
}

#[test]
fn test_play_tap_releases_step_wait() {
    let switches = ScriptedSwitches::new([Taps::single(Switch::Step), Taps::NONE, Taps::single(Switch::Play)]);
    let mut waiter = Waiter::new(switches, RecordingSleep::default());
    waiter.poll();
    block_on(waiter.wait_for_advance());

    block_on(waiter.wait_for_advance());
    assert_eq!(waiter.interaction().mode(), Mode::Play);
    assert_eq!(waiter.sleep().slices, [10]);
}

#[test]
fn test_gate_in_play_waits_delay() {
    let mut waiter = Waiter::new(ScriptedSwitches::default(), RecordingSleep::default());
    block_on(waiter.gate(187));
    assert_eq!(waiter.sleep().slices, [50, 50, 50, 37]);
}

#[test]
fn test_gate_in_step_ignores_delay() {
    let switches = ScriptedSwitches::new([Taps::single(Switch::Step)]);
    let mut waiter = Waiter::new(switches, RecordingSleep::default());
    waiter.poll();
    block_on(waiter.gate(187));
    assert!(waiter.sleep().slices.is_empty());
}
