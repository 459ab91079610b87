//! Unit tests for the transport layer.
