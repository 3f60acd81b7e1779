use pn5180::poll::{PollConfig, PollEvent, Poller};
use pn5180::test_support::{seed_double_uid, seed_single_uid};
use pn5180::transport::{Fault, TransportCall};
use pn5180::types::ActivationKind;

use crate::common::fixtures::{self, DOUBLE_UID, SINGLE_UID};

#[test]
fn arrival_departure_cycle() {
    let (shared, mut reader) = fixtures::mock_reader();
    let mut poller = Poller::default();

    assert_eq!(poller.update(&mut reader), PollEvent::NoChange);

    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);
    assert_eq!(poller.update(&mut reader), PollEvent::Updated);
    assert_eq!(poller.uid().unwrap().as_bytes(), &SINGLE_UID);

    assert_eq!(poller.update(&mut reader), PollEvent::Updated);
    assert!(poller.uid().is_none());
    assert_eq!(poller.update(&mut reader), PollEvent::NoChange);
    assert!(!poller.errored());
}

#[test]
fn single_to_double_size_swap() {
    let (shared, mut reader) = fixtures::mock_reader();
    let mut poller = Poller::default();

    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);
    poller.update(&mut reader);
    seed_double_uid(&mut shared.borrow_mut(), DOUBLE_UID, 0x00);
    assert_eq!(poller.update(&mut reader), PollEvent::Updated);
    assert_eq!(poller.uid().unwrap().as_bytes(), &DOUBLE_UID);
}

#[test]
fn errors_are_counted_and_latched() {
    let (shared, mut reader) = fixtures::mock_reader();
    let mut poller = Poller::default();
    shared.borrow_mut().inject(Fault::Reset);

    assert_eq!(poller.update(&mut reader), PollEvent::Error);
    assert_eq!(poller.update(&mut reader), PollEvent::Error);
    assert_eq!(poller.error_count(), 2);
    assert!(poller.errored());
    // the field is switched off even after a failed tick
    assert_eq!(shared.borrow().calls.last(), Some(&TransportCall::RfOff));
}

#[test]
fn wupa_polling() {
    let (shared, mut reader) = fixtures::mock_reader();
    let mut poller = Poller::new(PollConfig::default().with_kind(ActivationKind::Wupa));
    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);
    poller.update(&mut reader);
    assert_eq!(shared.borrow().sent_frames()[0], vec![0x52]);
}

#[test]
fn short_atqa_tick_is_quiet() {
    let (shared, mut reader) = fixtures::mock_reader();
    let mut poller = Poller::default();
    shared.borrow_mut().push_response(fixtures::frame("04"));

    assert_eq!(poller.update(&mut reader), PollEvent::NoChange);
    assert!(!poller.errored());
    assert_eq!(poller.error_count(), 0);
    assert!(poller.uid().is_none());
}
