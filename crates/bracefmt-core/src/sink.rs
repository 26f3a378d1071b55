//! Output sinks and scoped formatting state.
//!
//! A [`Sink`] is an append-only character destination carrying a mutable
//! [`SinkState`] (base, notation, case, width, precision). Substitutions
//! mutate that state through a [`StateGuard`], which restores the captured
//! state on drop so no placeholder can leak formatting into the next one or
//! into the caller's own use of the sink.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::directive::{Directive, Specifier};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure of one render pass.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The underlying `fmt::Write` destination rejected output.
    #[error("format write failed: {0}")]
    Fmt(#[from] fmt::Error),
    /// The underlying `io::Write` destination rejected output.
    #[error("i/o write failed: {0}")]
    Io(#[from] io::Error),
    /// A custom render hook reported a failure.
    #[error("render hook failed: {0}")]
    Hook(String),
}

// ---------------------------------------------------------------------------
// Formatting state
// ---------------------------------------------------------------------------

/// Numeric base for integer insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base {
    /// Base 10.
    #[default]
    Dec,
    /// Base 8.
    Oct,
    /// Base 16.
    Hex,
}

/// Notation for floating-point insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatStyle {
    /// Shortest form when no precision is set, significant digits otherwise.
    #[default]
    General,
    /// Mantissa-exponent notation (`1.500000e+03`).
    Scientific,
    /// Fixed-point notation (`1500.000000`).
    Fixed,
}

/// Upper bound on pad characters per insertion and on precision digits.
///
/// Scanned width and precision values saturate rather than overflow, so a
/// directive can carry `usize::MAX`; rendering clamps to this limit to keep
/// every pass bounded.
pub const FIELD_LIMIT: usize = 4096;

/// Formatting state carried by every sink.
///
/// The state only records requests; how each request shapes the output is
/// decided by the rendering side ([`crate::render`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinkState {
    /// Integer base for numeric insertions.
    pub base: Base,
    /// Float notation for numeric insertions.
    pub float_style: FloatStyle,
    /// Render letters (hex digits, exponent markers, `INF`/`NAN`) uppercase.
    pub uppercase: bool,
    /// Minimum width of the next insertion, consumed by it; 0 pads nothing.
    pub width: usize,
    /// Fractional or significant digits; 0 means unspecified.
    pub precision: usize,
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Append-only character destination with mutable formatting state.
pub trait Sink {
    /// Appends `text` verbatim.
    fn write_str(&mut self, text: &str) -> Result<(), RenderError>;

    /// Current formatting state.
    fn state(&self) -> &SinkState;

    /// Mutable formatting state.
    fn state_mut(&mut self) -> &mut SinkState;
}

/// Sink accumulating into an owned `String`.
#[derive(Debug, Default)]
pub struct BufferSink {
    buffer: String,
    state: SinkState,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The text accumulated so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the sink, returning the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Discards the accumulated text and resets the formatting state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = SinkState::default();
    }
}

impl Sink for BufferSink {
    fn write_str(&mut self, text: &str) -> Result<(), RenderError> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn state(&self) -> &SinkState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SinkState {
        &mut self.state
    }
}

/// Sink adapter over any [`fmt::Write`] destination.
pub struct FmtSink<'a, W: fmt::Write + ?Sized> {
    writer: &'a mut W,
    state: SinkState,
}

impl<'a, W: fmt::Write + ?Sized> FmtSink<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self {
            writer,
            state: SinkState::default(),
        }
    }
}

impl<W: fmt::Write + ?Sized> Sink for FmtSink<'_, W> {
    fn write_str(&mut self, text: &str) -> Result<(), RenderError> {
        self.writer.write_str(text)?;
        Ok(())
    }

    fn state(&self) -> &SinkState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SinkState {
        &mut self.state
    }
}

/// Sink adapter over any [`io::Write`] destination.
pub struct IoSink<W: io::Write> {
    writer: W,
    state: SinkState,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state: SinkState::default(),
        }
    }

    /// Consumes the sink, returning the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_str(&mut self, text: &str) -> Result<(), RenderError> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn state(&self) -> &SinkState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SinkState {
        &mut self.state
    }
}

// ---------------------------------------------------------------------------
// State guard
// ---------------------------------------------------------------------------

/// Scoped save/restore of a sink's [`SinkState`].
///
/// Captures the state at construction and writes it back on drop, on every
/// exit path. Render hooks run inside a guard, so a failing hook cannot
/// leave the sink with altered state.
pub struct StateGuard<'a> {
    sink: &'a mut dyn Sink,
    saved: SinkState,
}

impl<'a> StateGuard<'a> {
    /// Captures `sink`'s current state.
    pub fn new(sink: &'a mut dyn Sink) -> Self {
        let saved = *sink.state();
        Self { sink, saved }
    }

    /// Applies one directive's formatting requests to the guarded sink.
    ///
    /// The specifier's case selects letter case outright; width and
    /// precision are applied only when nonzero; a generic specifier leaves
    /// the current base and notation untouched.
    pub fn apply(&mut self, directive: &Directive) {
        let state = self.sink.state_mut();
        state.uppercase = directive.uppercase();
        if directive.width > 0 {
            state.width = directive.width;
        }
        if directive.precision > 0 {
            state.precision = directive.precision;
        }
        match directive.class() {
            Specifier::Decimal => state.base = Base::Dec,
            Specifier::Octal => state.base = Base::Oct,
            Specifier::Hex => state.base = Base::Hex,
            Specifier::Scientific => state.float_style = FloatStyle::Scientific,
            Specifier::Fixed => state.float_style = FloatStyle::Fixed,
            Specifier::Generic => {}
        }
    }

    /// The guarded sink, for writing while the guard is active.
    pub fn sink(&mut self) -> &mut dyn Sink {
        &mut *self.sink
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        *self.sink.state_mut() = self.saved;
    }
}
