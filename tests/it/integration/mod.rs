//! Integration tests for nodeboard.
//!
//! These tests verify the interaction between multiple components
//! and test complete gestures end-to-end.

mod gesture_flow_tests;
