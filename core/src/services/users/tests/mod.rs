//! Unit tests for the users module

mod query_tests;
