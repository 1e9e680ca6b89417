//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources a run
//! needs: the logger and the Public Suffix List handle used for
//! registrable-domain extraction.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// Creates a `psl::List` instance for extracting registrable domains from
/// hosts and URLs. The list is compiled into the binary; no network or
/// filesystem access is involved.
pub fn init_extractor() -> psl::List {
    psl::List
}
