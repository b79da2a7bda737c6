use zzregen::*;

const CUR: ChannelId = ChannelId::new(1);
const MAX: ChannelId = ChannelId::new(2);
const DUR: ChannelId = ChannelId::new(3);
const VAL: ChannelId = ChannelId::new(4);

fn stamina() -> ResourceState {
    ResourceState {
        current: 0,
        min: 0,
        max: 100,
        tick_interval: 10,
        tick_value: 5,
        last_update_at: NEVER_UPDATED,
        channels: Channels::none()
            .with_current(CUR)
            .with_max(MAX)
            .with_interval(DUR)
            .with_tick_value(VAL),
        ..ResourceState::default()
    }
}

/// Test plain time-based regeneration with no buffs.
#[test]
fn test_no_buff_regeneration() {
    let mut state = stamina();
    state.now = 35_000;

    assert!(state.update());
    assert_eq!(state.current, 15);
    assert_eq!(state.remaining_seconds, 5);
    assert_eq!(state.last_update_at, 35_000);
    assert_eq!(state.max, 100);
    assert_eq!(state.tick_interval, 10);
}

/// Test that milliseconds within the same second are ignored.
#[test]
fn test_now_truncated_to_seconds() {
    let mut a = stamina();
    a.now = 35_000;
    let mut b = stamina();
    b.now = 35_999;

    a.update();
    b.update();
    assert_eq!(a, ResourceState { now: 35_000, ..b });
}

/// Test that a second update at the same instant changes nothing.
#[test]
fn test_idempotent_at_same_now() {
    let mut state = stamina();
    state.now = 35_000;
    assert!(state.update());

    let after_first = state.clone();
    assert!(!state.update());
    assert_eq!(state, after_first);
}

/// Test idempotence while capped.
#[test]
fn test_idempotent_when_capped() {
    let mut state = stamina();
    state.now = 1_000_000;
    assert!(state.update());
    assert_eq!(state.current, 100);
    assert!(state.is_full());

    let after_first = state.clone();
    assert!(!state.update());
    assert_eq!(state, after_first);
}

/// Test that splitting a window into many calls gives the same result as one call.
#[test]
fn test_catch_up_matches_incremental_updates() {
    let mut once = stamina();
    once.max = 10_000;
    once.now = 95_000;
    once.update();

    let mut stepped = stamina();
    stepped.max = 10_000;
    for now in (1_000..=95_000).step_by(7_000).chain(std::iter::once(95_000)) {
        stepped.now = now;
        stepped.update();
    }

    assert_eq!(stepped.current, once.current);
    assert_eq!(stepped.remaining_seconds, once.remaining_seconds);
    assert_eq!(stepped.last_update_at, once.last_update_at);
}

/// Test resuming from a previous update rather than from epoch.
#[test]
fn test_resume_from_last_update() {
    let mut state = stamina();
    state.current = 40;
    state.last_update_at = 100_000;
    state.remaining_seconds = 3;
    state.now = 125_000;

    state.update();
    // 3s finishes the running tick, 20 more seconds give two more, 2s left over.
    assert_eq!(state.current, 55);
    assert_eq!(state.remaining_seconds, 8);
    assert_eq!(state.last_update_at, 125_000);
}

/// Test the cap snap and the immediate tick once headroom reopens.
#[test]
fn test_cap_snap_then_raised_max() {
    let mut state = stamina();
    state.tick_interval = 2;
    state.max = 10;
    state.current = 8;
    state.last_update_at = 0;
    state.now = 10_000;

    assert!(state.update());
    assert_eq!(state.current, 10);
    assert_eq!(state.last_update_at, 10_000);
    assert_eq!(state.remaining_seconds, 1);

    // One second later a max buff opens headroom. The snap banked one second,
    // so with an interval of 2 the tick completes at once; longer intervals
    // still wait `interval - 1` seconds.
    state.now = 11_000;
    state.buffs = vec![Buff::new(MAX, 10, 100_000)];
    assert!(state.update());
    assert_eq!(state.max, 20);
    assert_eq!(state.current, 15);
    assert_eq!(state.last_update_at, 11_000);
}

/// Test the cap snap with a longer interval: the first tick after headroom
/// reopens lands one second early, not immediately.
#[test]
fn test_cap_snap_banks_one_second() {
    let mut state = stamina();
    state.max = 10;
    state.current = 8;
    state.last_update_at = 0;
    state.now = 10_000;

    assert!(state.update());
    assert_eq!(state.current, 10);
    assert_eq!(state.remaining_seconds, 9);

    state.now = 11_000;
    state.buffs = vec![Buff::new(MAX, 10, 100_000)];
    assert!(state.update());
    assert_eq!(state.current, 10);
    assert_eq!(state.remaining_seconds, 8);
    assert_eq!(state.last_update_at, 11_000);

    state.max = 10;
    state.now = 18_000;
    state.update();
    assert_eq!(state.current, 10);

    state.max = 10;
    state.now = 19_000;
    state.update();
    assert_eq!(state.current, 15);
    assert_eq!(state.remaining_seconds, 10);
}

/// Test that max and interval buffs keep a second call idempotent once the
/// base values are restored.
#[test]
fn test_idempotent_with_refreshed_base_values() {
    let mut state = stamina();
    state.buffs = vec![Buff::new(DUR, -5, 1_000_000), Buff::new(MAX, -40, 1_000_000)];
    state.now = 35_000;

    assert!(state.update());
    assert_eq!(state.current, 35);
    assert_eq!(state.remaining_seconds, 5);
    assert_eq!(state.tick_interval, 5);
    assert_eq!(state.max, 60);

    let after_first = state.clone();
    state.tick_interval = 10;
    state.max = 100;
    assert!(!state.update());
    assert_eq!(state, after_first);
}

/// Test that the bound holds after every call of a long run.
#[test]
fn test_bounds_hold_across_calls() {
    let mut state = stamina();
    state.min = 5;
    state.current = 5;
    for step in 1..=40 {
        state.now = step * 3_000;
        state.buffs = vec![Buff::new(CUR, 7, state.now - 1_000)];
        state.update();
        assert!(state.current >= state.min, "below min at step {step}");
        assert!(state.current <= state.max, "above max at step {step}");
    }
}

/// Test an empty buff list on a never-updated resource.
#[test]
fn test_never_updated_counts_from_epoch() {
    let mut state = stamina();
    state.max = 1_000;
    state.now = 100_000;
    let report = reconcile(&mut state, &SystemClock);

    assert_eq!(report.now, 100_000);
    assert_eq!(report.total_ticks(), 10);
    assert_eq!(state.current, 50);
}

/// Test that the real clock is used when no frozen now is set.
#[test]
fn test_real_clock_fills_resource() {
    let mut state = stamina();
    assert!(update(&mut state));
    assert_eq!(state.current, 100);
    assert!(state.last_update_at > 0);
}

/// Test defaulting of a freshly reset record.
#[test]
fn test_reset_then_update() {
    let mut state = stamina();
    state.now = 35_000;
    state.update();

    reset(&mut state);
    assert_eq!(state, ResourceState::default());

    state.max = 3;
    state.now = 2_000;
    assert!(state.update());
    assert_eq!(state.tick_interval, 1);
    assert_eq!(state.tick_value, 1);
    assert_eq!(state.current, 2);
}

/// Test building a resource from config and running it.
#[test]
fn test_config_driven_resource() {
    let config = ResourceConfig::from_json(
        r#"{
            "min": 0,
            "max": 60,
            "tick_interval": 30,
            "tick_value": 1,
            "channels": { "interval": 3 }
        }"#,
    )
    .unwrap();

    let mut state = config.new_state(0).unwrap();
    state.buffs.push(Buff::new(DUR, -20, 10_000_000));

    let report = reconcile(&mut state, &FixedClock(600_000));
    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].tick_interval, 10);
    assert_eq!(state.current, 60);
    assert!(report.capped);
}

/// Test that state survives a serde round trip between calls.
#[test]
fn test_state_persists_between_calls() {
    let mut state = stamina();
    state.now = 35_000;
    state.update();

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: ResourceState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);

    restored.now = 45_000;
    restored.update();
    assert_eq!(restored.current, 20);
}
