/// Integration tests for the full replication flow: a typed synced value
/// driven through a simulated session, observing only what the host
/// observes (transfer triggers, completions, and drained events).
use syncvar::{ReplicationConfig, ReplicationPhase, SyncedFloat, SyncedInt, SyncedValue, ValueEvent};
use syncvar_test::SessionHarness;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn owner_broadcasts_default_state_on_initialize() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedInt = SyncedValue::new(unit, 0, &ReplicationConfig::default());

    session.oracle.grant(&unit);
    session.initialize(&mut value);

    assert_eq!(session.transfer_count(), 1);
    session.complete_transfer(&mut value, true);
    assert_eq!(value.coordinator().phase(), ReplicationPhase::Idle);
}

#[test]
fn non_owner_initialize_stays_quiet() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedInt = SyncedValue::new(unit, 0, &ReplicationConfig::default());

    session.initialize(&mut value);

    assert_eq!(session.transfer_count(), 0);
}

#[test]
fn owner_set_replicates_and_raises_changed_event() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedInt = SyncedValue::new(unit, 0, &ReplicationConfig::default());
    session.oracle.grant(&unit);

    session.set(&mut value, 5);

    assert_eq!(*value.get(), 5);
    assert_eq!(session.transfer_count(), 1);
    assert_eq!(
        value.take_events(),
        vec![ValueEvent::Changed {
            previous: 0,
            current: 5
        }]
    );

    // events drain exactly once
    assert!(value.take_events().is_empty());
}

#[test]
fn setting_the_same_value_is_a_complete_noop() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedInt = SyncedValue::new(unit, 3, &ReplicationConfig::default());
    session.oracle.grant(&unit);

    session.set(&mut value, 3);

    assert_eq!(session.transfer_count(), 0);
    assert!(value.take_events().is_empty());
}

#[test]
fn mutation_burst_coalesces_to_latest_value() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedInt = SyncedValue::new(unit, 0, &ReplicationConfig::default());
    session.oracle.grant(&unit);

    session.set(&mut value, 1);
    session.set(&mut value, 2);
    session.set(&mut value, 3);

    // one transfer in flight, the burst pends behind it
    assert_eq!(session.transfer_count(), 1);
    assert!(value.coordinator().has_secondary_pending());

    session.complete_transfer(&mut value, true);
    assert_eq!(session.transfer_count(), 2);
    log::debug!("trailing transfer serializes the unit's current state");

    // the trailing transfer serializes current state: exactly 3
    assert_eq!(*value.get(), 3);
    session.complete_transfer(&mut value, true);
    assert_eq!(session.transfer_count(), 2);
    assert_eq!(value.coordinator().phase(), ReplicationPhase::Idle);
}

#[test]
fn congested_session_defers_then_delivers() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let config = ReplicationConfig {
        backoff_seconds: 2.0,
        debug_logging: true,
    };
    let mut value: SyncedInt = SyncedValue::new(unit, 0, &config);
    session.oracle.grant(&unit);
    session.congestion.congested = true;

    session.set(&mut value, 9);
    assert_eq!(session.transfer_count(), 0);
    assert_eq!(value.coordinator().phase(), ReplicationPhase::Backoff);

    // congestion clears mid-window; the retry fires when the window elapses
    session.congestion.congested = false;
    session.tick(&mut value, 1.0);
    assert_eq!(session.transfer_count(), 0);
    session.tick(&mut value, 1.0);
    assert_eq!(session.transfer_count(), 1);

    session.complete_transfer(&mut value, true);
    assert_eq!(value.coordinator().phase(), ReplicationPhase::Idle);
}

#[test]
fn failed_transfers_retry_until_success() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let config = ReplicationConfig {
        backoff_seconds: 1.0,
        debug_logging: false,
    };
    let mut value: SyncedInt = SyncedValue::new(unit, 0, &config);
    session.oracle.grant(&unit);

    session.set(&mut value, 1);
    session.complete_transfer(&mut value, false);
    session.tick(&mut value, 1.0);
    session.complete_transfer(&mut value, false);
    session.tick(&mut value, 1.0);

    assert_eq!(session.transfer_count(), 3);
    session.complete_transfer(&mut value, true);
    assert_eq!(value.coordinator().phase(), ReplicationPhase::Idle);
    assert_eq!(session.transfer_count(), 3);
}

#[test]
fn remote_update_raises_event_only_on_real_change() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedInt = SyncedValue::new(unit, 0, &ReplicationConfig::default());

    value.receive_remote(4);
    assert_eq!(*value.get(), 4);
    assert_eq!(
        value.take_events(),
        vec![ValueEvent::Changed {
            previous: 0,
            current: 4
        }]
    );

    // same value again: swallowed
    value.receive_remote(4);
    assert!(value.take_events().is_empty());
    assert_eq!(session.transfer_count(), 0);
}

#[test]
fn nuisance_threshold_suppresses_sub_epsilon_float_updates() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedFloat = SyncedValue::new(unit, 0.0, &ReplicationConfig::default())
        .with_nuisance_threshold(0.05);
    session.oracle.grant(&unit);

    // within epsilon of the last known value: no event, no replication
    session.set(&mut value, 0.01);
    assert_eq!(session.transfer_count(), 0);
    assert!(value.take_events().is_empty());
    assert_eq!(*value.get(), 0.0);

    // a real change replicates
    session.set(&mut value, 0.2);
    assert_eq!(session.transfer_count(), 1);
    assert_eq!(value.take_events().len(), 1);

    // remote side applies the same suppression
    value.receive_remote(0.21);
    assert!(value.take_events().is_empty());
    value.receive_remote(0.5);
    assert_eq!(value.take_events().len(), 1);
}

#[test]
fn peer_membership_changes_rebroadcast_owner_state() {
    init_logging();
    let mut session = SessionHarness::new();
    let unit = session.allocate_unit();
    let mut value: SyncedInt = SyncedValue::new(unit, 2, &ReplicationConfig::default());
    session.oracle.grant(&unit);

    session.peer_joined(&mut value);
    assert_eq!(session.transfer_count(), 1);
    session.complete_transfer(&mut value, true);

    session.peer_left(&mut value);
    assert_eq!(session.transfer_count(), 2);
    session.complete_transfer(&mut value, true);

    // non-owner stays quiet on membership churn
    session.revoke_ownership(&mut value);
    session.peer_joined(&mut value);
    assert_eq!(session.transfer_count(), 2);
}
