//! Session orchestration and command-line front end for word search puzzles.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod gesture;
pub mod orchestrator;
pub mod render;
pub mod session;
pub mod settings;
pub mod validation;
pub mod worker;
