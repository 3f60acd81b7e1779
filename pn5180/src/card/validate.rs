// pn5180/src/card/validate.rs

//! UID plausibility rules.
//!
//! A wire exchange can succeed and still return garbage: an open RX line
//! reads as 0xFF, a detuned antenna as runs of 0x00. These checks reject
//! such UIDs so they are reported as "no card".

use crate::constants::CASCADE_TAG;
use crate::protocol::ActivationResponse;
use crate::types::{Atqa, Uid};

/// Accept the UID of an activation response, or `None` if it is not a
/// plausible card identifier.
pub fn validate_uid(resp: &ActivationResponse) -> Option<Uid> {
    is_plausible_uid(&resp.atqa, resp.uid.as_bytes()).then_some(resp.uid)
}

/// Raw form of [`validate_uid`]: `uid` must be 4 or 7 bytes long.
pub fn is_plausible_uid(atqa: &Atqa, uid: &[u8]) -> bool {
    if atqa.is_all_ones() {
        return false;
    }

    let Some((&first, rest)) = uid.split_first() else {
        return false;
    };
    if is_boundary(first) {
        return false;
    }
    if rest.iter().all(|&b| is_boundary(b)) {
        return false;
    }

    match uid.len() {
        4 => first != CASCADE_TAG,
        7 => {
            // bytes 3..7 came from cascade level 2
            let cl2 = &uid[3..7];
            cl2[0] != CASCADE_TAG
                && cl2[3] != CASCADE_TAG
                && !cl2.iter().all(|&b| b == 0x00)
                && !cl2.iter().all(|&b| b == 0xFF)
        }
        _ => false,
    }
}

fn is_boundary(b: u8) -> bool {
    b == 0x00 || b == 0xFF
}
