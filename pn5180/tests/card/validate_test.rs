use pn5180::card::{is_plausible_uid, validate_uid};
use pn5180::protocol::ActivationResponse;
use pn5180::types::{Atqa, Sak, Uid};

const ATQA: Atqa = Atqa::from_bytes([0x44, 0x00]);

#[test]
fn rule_table() {
    let cases: &[(&[u8], bool)] = &[
        (&[0x12, 0x34, 0x56, 0x78], true),
        (&[0x00, 0x34, 0x56, 0x78], false),
        (&[0xFF, 0x34, 0x56, 0x78], false),
        (&[0x88, 0x34, 0x56, 0x78], false),
        (&[0x12, 0x00, 0xFF, 0x00], false),
        (&[0x04, 0x21, 0x33, 0x6a, 0x1b, 0x52, 0x80], true),
        (&[0x04, 0x21, 0x33, 0x88, 0x1b, 0x52, 0x80], false),
        (&[0x04, 0x21, 0x33, 0x6a, 0x1b, 0x52, 0x88], false),
        (&[0x04, 0x21, 0x33, 0x00, 0x00, 0x00, 0x00], false),
        (&[0x04, 0x21, 0x33, 0x6a, 0x1b], false),
    ];
    for (uid, expected) in cases {
        assert_eq!(
            is_plausible_uid(&ATQA, uid),
            *expected,
            "uid {:02x?}",
            uid
        );
    }
}

#[test]
fn response_with_all_ones_atqa_is_rejected() {
    let resp = ActivationResponse::new(
        Atqa::from_bytes([0xFF, 0xFF]),
        Sak::new(0x08),
        Uid::single([0x12, 0x34, 0x56, 0x78]),
    );
    assert_eq!(validate_uid(&resp), None);
}
