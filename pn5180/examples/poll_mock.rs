//! Drive a Poller against a scripted MockTransport and print card events.
//!
//! Run with `RUST_LOG=debug cargo run --example poll_mock` to see the
//! activation stages.

use anyhow::Result;
use pn5180::prelude::*;
use pn5180::test_support::{SharedMock, fast_config, seed_double_uid, seed_single_uid};

const SINGLE: [u8; 4] = [0x12, 0x34, 0x56, 0x78];
const DOUBLE: [u8; 7] = [0x04, 0x21, 0x33, 0x6a, 0x1b, 0x52, 0x80];

enum InField {
    Nothing,
    Single,
    Double,
}

fn main() -> Result<()> {
    env_logger::init();

    let shared = SharedMock::new();
    let mut reader = ReaderBuilder::new()
        .with_transport(shared.boxed())
        .with_config(fast_config())
        .build()?;
    let mut poller = Poller::new(PollConfig::default().with_absent_ticks_before_clear(2));

    let ticks = [
        InField::Nothing,
        InField::Single,
        InField::Single,
        InField::Double,
        InField::Nothing,
        InField::Nothing,
    ];
    for (tick, field) in ticks.iter().enumerate() {
        match field {
            InField::Nothing => {}
            InField::Single => seed_single_uid(&mut shared.borrow_mut(), SINGLE, 0x08),
            InField::Double => seed_double_uid(&mut shared.borrow_mut(), DOUBLE, 0x00),
        }
        let event = poller.update(&mut reader);
        let uid = poller
            .uid()
            .map_or_else(|| "-".to_string(), |u| u.to_string());
        println!("tick {}: {} uid={} errors={}", tick, event, uid, poller.error_count());
    }

    seed_single_uid(&mut shared.borrow_mut(), SINGLE, 0x08);
    if let Some(card) = reader.select_card(ActivationKind::Reqa)? {
        shared.borrow_mut().push_response((0u8..16).collect());
        let block = card.read_block(&mut reader, 4)?;
        println!("{} {:?} block 4: {}", card.uid(), card.card_type(), block.to_hex());

        shared.borrow_mut().push_response(vec![0x0A]);
        shared.borrow_mut().push_response(vec![0x0A]);
        let ack = card.write_block(&mut reader, 4, &block)?;
        println!("write ack {:#04x}", ack.as_u8());

        card.halt(&mut reader);
    }
    Ok(())
}
