//! Observability setup for Runeforge: structured logging via `tracing`, with
//! optional OpenTelemetry span export.

pub mod tracing_setup;
