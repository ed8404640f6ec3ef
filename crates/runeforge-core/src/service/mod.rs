//! Service layer wiring profile building and build advice together.

pub mod advisor;
