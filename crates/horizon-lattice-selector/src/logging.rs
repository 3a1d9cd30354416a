//! Logging facilities for the selector builder.
//!
//! The builder is instrumented with the `tracing` crate. Rejected parts are
//! logged at `debug`, combine and render at `trace`. Nothing is printed unless
//! the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_max_level(tracing::Level::TRACE)
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Expression builder target (part validation, combine, render).
    pub const EXPRESSION: &str = "horizon_lattice_selector::expression";
}
