//! Error types with diagnostics using miette
//!
//! The layout engine itself is infallible; errors only surface at the
//! configuration boundary, from the measurement host, and when a sheet is
//! printed with geometry that cannot be drawn.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from parsing configuration values and cell identities
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown orientation: {value}")]
    #[diagnostic(
        code(fourbysix::config::unknown_orientation),
        help("expected `portrait` or `landscape`")
    )]
    UnknownOrientation { value: String },

    #[error("unknown text alignment: {value}")]
    #[diagnostic(
        code(fourbysix::config::unknown_alignment),
        help("expected `left`, `center` or `right`")
    )]
    UnknownAlignment { value: String },

    #[error("unknown border style: {value}")]
    #[diagnostic(
        code(fourbysix::config::unknown_border),
        help("expected `none`, `thick` or `rounded`")
    )]
    UnknownBorder { value: String },

    #[error("invalid cell identity: {value}")]
    #[diagnostic(
        code(fourbysix::config::invalid_cell_id),
        help("cell identities look like `label-<row>-<col>`, e.g. `label-0-1`")
    )]
    InvalidCellId { value: String },

    #[error("invalid cell assignment: {value}")]
    #[diagnostic(
        code(fourbysix::config::invalid_cell_assignment),
        help("use `label-<row>-<col>=<text>`")
    )]
    InvalidCellAssignment { value: String },
}

// ============================================================================
// Measurement Errors
// ============================================================================

/// Errors raised while measuring text on a [`crate::measure::MeasureHost`]
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("measurement probe {id} is not attached")]
    #[diagnostic(code(fourbysix::measure::probe_not_attached))]
    ProbeNotAttached { id: u64 },

    #[error("invalid probe width: {width}px")]
    #[diagnostic(
        code(fourbysix::measure::invalid_probe_width),
        help("the container is narrower than its fixed horizontal padding")
    )]
    InvalidProbeWidth { width: f64 },

    #[error("invalid font size: {size}px")]
    #[diagnostic(code(fourbysix::measure::invalid_font_size))]
    InvalidFontSize { size: f64 },

    #[error("measured extent is NaN or infinite")]
    #[diagnostic(code(fourbysix::measure::non_finite_extent))]
    NonFiniteExtent,
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while printing a sheet
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("degenerate label geometry: {width}in x {height}in")]
    #[diagnostic(
        code(fourbysix::render::degenerate_geometry),
        help("keep rows and columns between 1 and 6 so every label has a positive size")
    )]
    DegenerateGeometry { width: f64, height: f64 },
}
