//! Embedded word lists
//!
//! The sample lists under `data/sample/`, compiled in by the build script.

include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/guesses.rs"));
