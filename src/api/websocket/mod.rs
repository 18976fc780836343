//! WebSocket endpoint for the relay
//!
//! Each socket at `/ws` is one relay connection. Frames read from the socket
//! are dispatched to the relay; frames the relay queues for the connection
//! are written back by a dedicated writer task.

pub mod handler;
pub mod state;

pub use handler::ws_handler;
pub use state::AppState;
