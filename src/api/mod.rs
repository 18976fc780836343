//! API module for HTTP and WebSocket endpoints
//!
//! This module provides the relay socket and the diagnostic HTTP routes.

pub mod http;
pub mod rest;
pub mod websocket;
