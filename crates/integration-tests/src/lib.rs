//! Integration tests for Messenger.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the service
//! cargo run -p messenger-api
//!
//! # Run integration tests against it
//! cargo test -p messenger-integration-tests -- --ignored
//! ```
//!
//! The tests target `http://localhost:8000` by default; override with
//! `MESSENGER_BASE_URL`. They create records in whatever database the
//! running server is using, so point it at a throwaway file.
