//! Unit tests for the banking module
