use std::time::Duration;

use pn5180::error::{Error, FaultKind, Stage};
use pn5180::protocol::ActivationResponse;
use pn5180::test_support::{fast_config, seed_double_uid, seed_single_uid};
use pn5180::transport::{Fault, TransportCall};
use pn5180::types::{ActivationKind, CardType, CascadeLevel, Register, TransceiveState, UidSize};

use crate::common::fixtures::{self, DOUBLE_UID, SINGLE_UID};

#[test]
fn single_size_card_end_to_end() {
    let (shared, mut reader) = fixtures::mock_reader();
    {
        let mut m = shared.borrow_mut();
        m.push_response(fixtures::frame("04 00"));
        // BCC is not checked unless asked for
        m.push_response(fixtures::frame("12 34 56 78 9a"));
        m.push_response(fixtures::frame("08"));
    }

    let uid = reader.read_card_serial().unwrap().expect("uid");
    assert_eq!(uid.size(), UidSize::Single);
    assert_eq!(uid.as_bytes(), &[0x12, 0x34, 0x56, 0x78]);
    assert_eq!(uid.to_string(), "12:34:56:78");
}

#[test]
fn double_size_card_end_to_end() {
    let (shared, mut reader) = fixtures::mock_reader();
    seed_double_uid(&mut shared.borrow_mut(), DOUBLE_UID, 0x00);

    let resp = reader
        .activate_type_a(ActivationKind::Wupa)
        .unwrap()
        .expect("response");
    assert_eq!(resp.uid.as_bytes(), &DOUBLE_UID);
    assert_eq!(resp.atqa.as_bytes(), &[0x44, 0x00]);
    assert_eq!(resp.sak.card_type(), CardType::MifareUltralight);

    let frames = shared.borrow().sent_frames();
    assert_eq!(frames[0], vec![0x52]);
    assert_eq!(frames[1], vec![0x93, 0x20]);
    assert_eq!(frames[3], vec![0x95, 0x20]);
    assert_eq!(&frames[4][..2], &[0x95, 0x70]);
}

#[test]
fn activation_response_survives_byte_image() {
    let (shared, mut reader) = fixtures::mock_reader();
    seed_double_uid(&mut shared.borrow_mut(), DOUBLE_UID, 0x00);
    let resp = reader.activate_type_a(ActivationKind::Reqa).unwrap().unwrap();

    let image = resp.to_bytes();
    assert_eq!(&image[..2], &[0x44, 0x00]);
    assert_eq!(&image[3..], &DOUBLE_UID);
    let back = ActivationResponse::from_bytes(&image, UidSize::Double).unwrap();
    assert_eq!(back, resp);
}

#[test]
fn empty_field_is_not_an_error() {
    let (shared, mut reader) = fixtures::mock_reader();
    assert!(reader.activate_type_a(ActivationKind::Reqa).unwrap().is_none());
    // nothing is sent after the unanswered REQA
    assert_eq!(shared.borrow().sent_frames(), vec![vec![0x26]]);
}

#[test]
fn request_is_a_short_frame() {
    let (shared, mut reader) = fixtures::mock_reader();
    reader.activate_type_a(ActivationKind::Reqa).unwrap();
    assert!(
        shared
            .borrow()
            .calls
            .contains(&TransportCall::Send(vec![0x26], 7))
    );
}

#[test]
fn waits_are_delegated_to_transport() {
    let (shared, mut reader) = fixtures::mock_reader_with(fixtures::timed_config());
    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);
    reader.read_card_serial().unwrap().unwrap();
    // field settle + ATQA wait + anti-collision settle
    assert_eq!(shared.borrow().slept, Duration::from_millis(25));
}

#[test]
fn stuck_front_end_times_out() {
    let (shared, mut reader) = fixtures::mock_reader();
    shared.borrow_mut().idle_state = TransceiveState::Idle;

    let err = reader.activate_type_a(ActivationKind::Reqa).unwrap_err();
    assert!(matches!(
        err,
        Error::NotReadyToTransmit {
            state: TransceiveState::Idle
        }
    ));
    assert_eq!(err.kind(), FaultKind::Timing);
}

#[test]
fn collision_is_reported_with_level() {
    let (shared, mut reader) = fixtures::mock_reader();
    {
        let mut m = shared.borrow_mut();
        m.push_response(vec![0x04, 0x00]);
        m.push_response(vec![0x12, 0x34, 0x56]);
    }
    let err = reader.activate_type_a(ActivationKind::Reqa).unwrap_err();
    assert!(matches!(
        err,
        Error::Collision {
            level: CascadeLevel::Level1,
            actual: 3
        }
    ));
}

#[test]
fn crc_register_fault_names_its_stage() {
    let (shared, mut reader) = fixtures::mock_reader();
    shared
        .borrow_mut()
        .inject(Fault::OrMask(Register::CrcTxConfig, 0x01));
    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);

    let err = reader.activate_type_a(ActivationKind::Reqa).unwrap_err();
    assert_eq!(err.stage(), Some(Stage::EnableTxCrc));
    assert_eq!(err.kind(), FaultKind::Transport);
}

#[test]
fn bcc_checked_when_enabled() {
    let (shared, mut reader) =
        fixtures::mock_reader_with(fast_config().with_verify_bcc(true));
    {
        let mut m = shared.borrow_mut();
        m.push_response(vec![0x04, 0x00]);
        m.push_response(vec![0x12, 0x34, 0x56, 0x78, 0x9A]);
        m.push_response(vec![0x08]);
    }
    let err = reader.read_card_serial().unwrap_err();
    assert_eq!(err.stage(), Some(Stage::AntiCollision(CascadeLevel::Level1)));
}

#[test]
fn implausible_uid_reads_as_no_card() {
    let (shared, mut reader) = fixtures::mock_reader();
    seed_single_uid(&mut shared.borrow_mut(), [0xFF, 0xFF, 0xFF, 0xFF], 0x08);
    assert_eq!(reader.read_card_serial().unwrap(), None);
}

#[test]
fn triple_size_card_reads_as_no_card() {
    let (shared, mut reader) = fixtures::mock_reader();
    // CL2 starts with the cascade tag and the final SAK still cascades
    seed_double_uid(
        &mut shared.borrow_mut(),
        [0x04, 0x21, 0x33, 0x88, 0x1b, 0x52, 0x80],
        0x04,
    );
    assert_eq!(reader.read_card_serial().unwrap(), None);
    assert_eq!(shared.borrow().sent_frames().len(), 5);
}

#[test]
fn wait_transmit_reached_after_idle_polls() {
    let (shared, mut reader) = fixtures::mock_reader_with(
        fast_config().with_wait_transmit_timeout(Duration::from_millis(10)),
    );
    {
        let mut m = shared.borrow_mut();
        m.push_state(TransceiveState::Idle);
        m.push_state(TransceiveState::Idle);
    }
    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);

    let uid = reader.read_card_serial().unwrap().unwrap();
    assert_eq!(uid.as_bytes(), &SINGLE_UID);
}

#[test]
fn presence_check() {
    let (shared, mut reader) = fixtures::mock_reader();
    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);
    assert!(reader.is_card_present());
    assert!(!reader.is_card_present());
}
