//! Unit tests for the authentication module


mod service_tests;
