//! Wire protocol for the relay socket
//!
//! Clients send `{"event", "data", "ack"}` envelopes. The server answers
//! requests with `{"ack", "data"}` and pushes `{"event", "data"}` events.

mod frame;

pub use frame::{events, AckFrame, ClientFrame, OutboundFrame};
