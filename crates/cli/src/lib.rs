//! `vaxtrace-cli` — the line-oriented command interpreter.
//!
//! Reads single-letter commands from a buffered reader, performs all format
//! validation (dates, batch id syntax, name syntax, quoting), drives the
//! [`vaxtrace_engine::Engine`], and renders outcomes as localized text.
//! Success output (ids, dates, counts) is locale-independent; only error
//! strings are translated.

pub mod interpreter;
pub mod locale;
pub mod parse;

pub use interpreter::Interpreter;
pub use locale::Locale;
