//! Networking layer for client-server communication.
//!
//! This module provides a blocking TCP client and the binary protocol it
//! speaks: length-prefixed messages serialized with bincode.

/// Blocking TCP client that seats a bot at a poker server.
pub mod client;

/// Error types for message framing and serialization.
pub mod errors;

/// Message types for client-server communication protocol.
pub mod messages;

/// Utilities for binary message serialization and framing.
pub mod utils;
