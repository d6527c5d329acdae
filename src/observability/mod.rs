//! Observability for the calculator: structured logging to stderr.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};

pub use logging::evaluation_span;
