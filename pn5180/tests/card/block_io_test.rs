use pn5180::card::Card;
use pn5180::constants::{CRC_DISABLE_MASK, CRC_ENABLE_MASK};
use pn5180::error::Error;
use pn5180::test_support::seed_single_uid;
use pn5180::transport::TransportCall;
use pn5180::types::{ActivationKind, Register};

use crate::common::fixtures::{self, SINGLE_UID};

fn selected_card(shared: &pn5180::test_support::SharedMock, reader: &mut pn5180::Reader) -> Card {
    seed_single_uid(&mut shared.borrow_mut(), SINGLE_UID, 0x08);
    reader
        .select_card(ActivationKind::Reqa)
        .unwrap()
        .expect("card in field")
}

#[test]
fn write_acknowledged() {
    let (shared, mut reader) = fixtures::mock_reader();
    let card = selected_card(&shared, &mut reader);
    {
        let mut m = shared.borrow_mut();
        m.calls.clear();
        m.push_response(vec![0x0A]);
        m.push_response(vec![0x0A]);
    }

    let data = fixtures::sample_block(0x42);
    let ack = card.write_block(&mut reader, 4, &data).unwrap();
    assert_eq!(ack.as_u8(), 0x0A);

    let m = shared.borrow();
    assert_eq!(
        m.calls.first(),
        Some(&TransportCall::AndMask(Register::CrcRxConfig, CRC_DISABLE_MASK))
    );
    assert_eq!(
        m.calls.last(),
        Some(&TransportCall::OrMask(Register::CrcRxConfig, CRC_ENABLE_MASK))
    );
    assert_eq!(m.sent_frames(), vec![vec![0xA0, 4], data.as_bytes().to_vec()]);
}

#[test]
fn write_nak_is_passed_through() {
    let (shared, mut reader) = fixtures::mock_reader();
    let card = selected_card(&shared, &mut reader);
    {
        let mut m = shared.borrow_mut();
        m.push_response(vec![0x0A]);
        m.push_response(vec![0x00]);
    }

    let ack = card
        .write_block(&mut reader, 4, &fixtures::sample_block(0x42))
        .unwrap();
    assert_eq!(ack.as_u8(), 0x00);
    assert_eq!(
        shared.borrow().calls.last(),
        Some(&TransportCall::OrMask(Register::CrcRxConfig, CRC_ENABLE_MASK))
    );
}

#[test]
fn read_full_block() {
    let (shared, mut reader) = fixtures::mock_reader();
    let card = selected_card(&shared, &mut reader);
    let expected = fixtures::sample_block(0x37);
    shared
        .borrow_mut()
        .push_response(expected.as_bytes().to_vec());

    let block = card.read_block(&mut reader, 2).unwrap();
    assert_eq!(block, expected);
    assert_eq!(
        shared.borrow().sent_frames().last(),
        Some(&vec![0x30, 0x02])
    );
}

#[test]
fn read_short_block_fails() {
    let (shared, mut reader) = fixtures::mock_reader();
    let card = selected_card(&shared, &mut reader);
    shared.borrow_mut().push_response(vec![0x37; 15]);

    match card.read_block(&mut reader, 2) {
        Err(Error::InvalidLength { expected, actual }) => {
            assert_eq!((expected, actual), (16, 15));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn halt_sends_hlta() {
    let (shared, mut reader) = fixtures::mock_reader();
    let card = selected_card(&shared, &mut reader);
    shared.borrow_mut().calls.clear();

    card.halt(&mut reader);
    assert_eq!(
        shared.borrow().calls,
        vec![TransportCall::Send(vec![0x50, 0x00], 0)]
    );
}
