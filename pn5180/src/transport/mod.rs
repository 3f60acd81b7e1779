// pn5180/src/transport/mod.rs

//! Host interface to the PN5180 and its simulated counterpart.

/// Scripted front end for tests
pub mod mock;
/// The `Transport` trait
pub mod traits;

pub use mock::{Fault, MockTransport, TransportCall};
pub use traits::Transport;
