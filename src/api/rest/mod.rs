//! REST endpoints
//!
//! - `GET /debug-rooms` - Registry dump for diagnostics

pub mod rooms;
