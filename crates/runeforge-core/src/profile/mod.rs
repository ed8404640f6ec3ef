//! Character profile construction from the class catalog.

pub mod builder;
