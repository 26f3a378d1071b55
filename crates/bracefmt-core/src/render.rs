//! Default per-type insertion.
//!
//! [`Render`] is the operation a captured argument performs against a sink
//! whose state a directive has already shaped. Implementations read the
//! state they care about (base and case for integers, notation and
//! precision for floats, width for everything) and append through
//! [`put_padded`].

use std::fmt;

use crate::num::{display_with_case, float_to_string, int_digits};
use crate::sink::{Base, FIELD_LIMIT, FloatStyle, RenderError, Sink};

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

/// Inserts `self` into a sink under the sink's current formatting state.
pub trait Render {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError>;
}

/// Appends `text` right-aligned in the sink's pending field width, then
/// consumes that width. Width counts characters, not bytes; at most
/// [`FIELD_LIMIT`] pad characters are emitted.
pub fn put_padded(sink: &mut dyn Sink, text: &str) -> Result<(), RenderError> {
    let width = sink.state().width;
    sink.state_mut().width = 0;
    let visible = text.chars().count();
    if width > visible {
        // Bounded: a scanned width can be arbitrarily large.
        let pad = (width - visible).min(FIELD_LIMIT);
        sink.write_str(&" ".repeat(pad))?;
    }
    sink.write_str(text)
}

// ---------------------------------------------------------------------------
// Default implementations
// ---------------------------------------------------------------------------

macro_rules! render_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Render for $t {
            fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
                let state = *sink.state();
                let text = int_digits(*self as u128, state.base, state.uppercase);
                put_padded(sink, &text)
            }
        }
    )*};
}

render_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! render_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl Render for $t {
            fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
                let state = *sink.state();
                let text = match state.base {
                    Base::Dec => self.to_string(),
                    // octal/hex show the two's-complement bit pattern at
                    // the argument's own width
                    _ => int_digits((*self as $u) as u128, state.base, state.uppercase),
                };
                put_padded(sink, &text)
            }
        }
    )*};
}

render_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl Render for f64 {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        let state = *sink.state();
        let text = float_to_string(*self, state.float_style, state.precision, state.uppercase);
        put_padded(sink, &text)
    }
}

impl Render for f32 {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        let state = *sink.state();
        // widening first would print the f64 expansion of the nearest f32;
        // let the f32 produce its own shortest form
        let text = if state.float_style == FloatStyle::General
            && state.precision == 0
            && self.is_finite()
        {
            display_with_case(self.to_string(), state.uppercase)
        } else {
            float_to_string(
                f64::from(*self),
                state.float_style,
                state.precision,
                state.uppercase,
            )
        };
        put_padded(sink, &text)
    }
}

impl Render for bool {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        put_padded(sink, if *self { "true" } else { "false" })
    }
}

impl Render for char {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        let mut buf = [0u8; 4];
        put_padded(sink, self.encode_utf8(&mut buf))
    }
}

impl Render for &str {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        put_padded(sink, self)
    }
}

impl Render for String {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        put_padded(sink, self)
    }
}

/// Adapter rendering any [`fmt::Display`] value through its display form.
///
/// Base, notation, and precision requests do not reach the displayed value;
/// only the field width applies. Useful for one-off domain types that need
/// no hook of their own.
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Render for Displayed<T> {
    fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        put_padded(sink, &self.0.to_string())
    }
}
