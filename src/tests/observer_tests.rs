//! Unit tests for observer registration, fan-out and scope guards.

use std::sync::Arc;

use crate::observer::LogObserver;
use crate::scope::{FlushScope, ObserverScope};
use crate::tests::test_utils::{quiet_logger, CollectingObserver, PanickingObserver};

#[test]
fn add_fires_registered_exactly_once() {
    let logger = quiet_logger("obs");
    let observer = Arc::new(CollectingObserver::new());

    logger.add_observer(observer.clone());

    assert_eq!(observer.registrations(), 1);
    assert_eq!(observer.unregistrations(), 0);
}

#[test]
fn remove_fires_unregistered_and_stops_delivery() {
    let logger = quiet_logger("obs");
    let observer = Arc::new(CollectingObserver::new());
    let handle: Arc<dyn LogObserver> = observer.clone();

    logger.add_observer(handle.clone());
    logger.info("delivered", &[]);
    logger.remove_observer(&handle);
    logger.info("not delivered", &[]);

    assert_eq!(observer.unregistrations(), 1);
    assert_eq!(observer.messages(), vec!["delivered"]);
}

#[test]
fn removing_an_unknown_handle_is_a_no_op() {
    let logger = quiet_logger("obs");
    let registered = Arc::new(CollectingObserver::new());
    let stranger = Arc::new(CollectingObserver::new());

    logger.add_observer(registered.clone());
    let stranger_handle: Arc<dyn LogObserver> = stranger.clone();
    logger.remove_observer(&stranger_handle);

    assert_eq!(stranger.unregistrations(), 0);
    logger.info("still flowing", &[]);
    assert_eq!(registered.message_count(), 1);
}

#[test]
fn each_message_reaches_every_registered_observer_once() {
    let logger = quiet_logger("obs");
    let first = Arc::new(CollectingObserver::new());
    let second = Arc::new(CollectingObserver::new());

    logger.add_observer(first.clone());
    logger.add_observer(second.clone());
    logger.info("fan out", &[]);

    assert_eq!(first.messages(), vec!["fan out"]);
    assert_eq!(second.messages(), vec!["fan out"]);
}

#[test]
fn duplicate_registration_yields_duplicate_notifications() {
    let logger = quiet_logger("obs");
    let observer = Arc::new(CollectingObserver::new());
    let handle: Arc<dyn LogObserver> = observer.clone();

    logger.add_observer(handle.clone());
    logger.add_observer(handle.clone());
    assert_eq!(observer.registrations(), 2);

    logger.info("twice", &[]);
    assert_eq!(observer.message_count(), 2);

    // One removal drops one registration; the other keeps delivering.
    logger.remove_observer(&handle);
    assert_eq!(observer.unregistrations(), 1);
    logger.info("once", &[]);
    assert_eq!(observer.message_count(), 3);
}

#[test]
fn observers_receive_no_filtered_messages() {
    let logger = quiet_logger("obs");
    let observer = Arc::new(CollectingObserver::new());
    logger.add_observer(observer.clone());

    logger.debug("below threshold", &[]);
    assert_eq!(observer.message_count(), 0);
}

#[test]
fn flush_notifies_observers_without_touching_the_buffer() {
    let logger = quiet_logger("obs");
    logger.enable_buffer(0);
    let observer = Arc::new(CollectingObserver::new());
    logger.add_observer(observer.clone());

    logger.info("buffered", &[]);
    logger.flush();

    assert_eq!(observer.flushes(), 1);
    assert_eq!(logger.buffer().expect("buffer").len(), 1);
}

#[test]
fn a_panicking_observer_does_not_starve_the_others() {
    let logger = quiet_logger("obs");
    logger.add_observer(Arc::new(PanickingObserver));
    let survivor = Arc::new(CollectingObserver::new());
    logger.add_observer(survivor.clone());

    logger.info("resilient", &[]);

    assert_eq!(survivor.messages(), vec!["resilient"]);
}

#[test]
fn observer_scope_registers_for_its_lifetime_only() {
    let logger = quiet_logger("scope");
    let observer = Arc::new(CollectingObserver::new());

    {
        let _scope = ObserverScope::new(&logger, observer.clone());
        assert_eq!(observer.registrations(), 1);
        logger.info("inside", &[]);
    }

    assert_eq!(observer.unregistrations(), 1);
    logger.info("outside", &[]);
    assert_eq!(observer.messages(), vec!["inside"]);
}

#[test]
fn observer_scope_unregisters_on_unwind() {
    let logger = quiet_logger("scope");
    let observer = Arc::new(CollectingObserver::new());

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _scope = ObserverScope::new(&logger, observer.clone());
        panic!("unwind through the scope");
    }));
    assert!(result.is_err());

    assert_eq!(observer.unregistrations(), 1);
}

#[test]
fn flush_scope_flushes_on_drop() {
    let logger = quiet_logger("scope");
    let observer = Arc::new(CollectingObserver::new());
    logger.add_observer(observer.clone());

    {
        let _scope = FlushScope::new(&logger);
        assert_eq!(observer.flushes(), 0);
    }

    assert_eq!(observer.flushes(), 1);
}
