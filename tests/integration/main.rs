//! Integration tests for tintlog
//!
//! End-to-end scenarios through the public API: logger assembly, both
//! rendering strategies, and the `tracing` bridge.

mod tracing_bridge;
