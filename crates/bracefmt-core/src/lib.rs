//! # bracefmt-core
//!
//! Indexed-placeholder template formatting:
//! `{index[,width][:specifier[precision]]}` templates bound to a captured,
//! type-erased argument list, rendered repeatably into any append-only
//! sink.
//!
//! A formatter is write-once, read-many: arguments are copied into the
//! formatter when it is built, and a render pass never mutates it, only
//! the sink. Per-placeholder base, case, width, and precision requests are
//! scoped by a state guard and cannot leak between placeholders.
//!
//! ```
//! use bracefmt_core::build;
//!
//! let line = build!("Test: {0:X}, {1}", 42, "sup");
//! assert_eq!(line.render_to_string().unwrap(), "Test: 2A, sup");
//! ```
//!
//! Literal braces cannot be escaped in a template; pass them through an
//! argument instead.

#![deny(unsafe_code)]

pub mod args;
pub mod directive;
pub mod hooks;
mod num;
pub mod render;
pub mod sink;
pub mod template;

pub use args::ArgList;
pub use directive::{Directive, GENERIC_SPECIFIER, Specifier, parse_directive};
pub use hooks::{HookFn, Hooks, register, unregister};
pub use render::{Displayed, Render, put_padded};
pub use sink::{
    Base, BufferSink, FIELD_LIMIT, FloatStyle, FmtSink, IoSink, RenderError, Sink, SinkState,
    StateGuard,
};
pub use template::Formatter;

/// Builds a [`Formatter`] from a template and a list of values to capture.
///
/// Each value goes through [`ArgList::push`], so it must implement
/// [`Render`] and be `Send + Sync + 'static`; a process-global hook
/// registered for its type overrides the default rendering.
///
/// ```
/// use bracefmt_core::build;
///
/// let fmt = build!("{1} {0}", "a", "b");
/// assert_eq!(fmt.render_to_string().unwrap(), "b a");
/// ```
#[macro_export]
macro_rules! build {
    ($template:expr $(,)?) => {
        $crate::Formatter::new($template, $crate::ArgList::new())
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {{
        let mut args = $crate::ArgList::new();
        $(args.push($arg);)+
        $crate::Formatter::new($template, args)
    }};
}
