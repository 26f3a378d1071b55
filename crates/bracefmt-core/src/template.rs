//! Templates and the render pipeline.
//!
//! A [`Formatter`] binds one template to one captured argument list.
//! Rendering walks the template once, copies literal spans verbatim, and
//! dispatches each `{...}` placeholder through a state guard to the
//! referenced argument. The formatter itself is never mutated by a render
//! pass, so one instance may serve many sinks, concurrently if needed.

use std::fmt;

use crate::args::ArgList;
use crate::directive::parse_directive;
use crate::sink::{BufferSink, FmtSink, RenderError, Sink};

/// A reusable, write-once binding of template text to captured arguments.
#[derive(Debug)]
pub struct Formatter {
    template: String,
    args: ArgList,
}

impl Formatter {
    /// Binds `template` to `args`.
    #[must_use]
    pub fn new(template: impl Into<String>, args: ArgList) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// The template text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of captured arguments.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Renders one full pass into `sink`.
    ///
    /// Literal spans are copied verbatim. A placeholder whose index is out
    /// of range emits nothing. An unterminated `{` ends the pass after
    /// emitting it and the rest of the template verbatim.
    pub fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            sink.write_str(&rest[..open])?;
            let tail = &rest[open + 1..];
            match tail.find('}') {
                Some(close) => {
                    let directive = parse_directive(&tail[..close]);
                    if let Some(cell) = self.args.get(directive.index) {
                        cell.format(sink, &directive)?;
                    }
                    rest = &tail[close + 1..];
                }
                None => {
                    // unterminated directive: emit the tail verbatim rather
                    // than rescanning the same brace forever
                    return sink.write_str(&rest[open..]);
                }
            }
        }
        sink.write_str(rest)
    }

    /// Renders into a fresh internal buffer.
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        let mut sink = BufferSink::new();
        self.render(&mut sink)?;
        Ok(sink.into_string())
    }
}

impl fmt::Display for Formatter {
    /// Renders into the destination behind the standard formatting
    /// machinery. Failure detail collapses to [`fmt::Error`]; use
    /// [`Formatter::render_to_string`] to keep the cause.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sink = FmtSink::new(f);
        self.render(&mut sink).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SinkState;

    #[test]
    fn test_literal_template_is_identity() {
        let fmt = Formatter::new("no placeholders here", ArgList::new());
        assert_eq!(fmt.render_to_string().unwrap(), "no placeholders here");
    }

    #[test]
    fn test_empty_template() {
        let fmt = Formatter::new("", ArgList::new());
        assert_eq!(fmt.render_to_string().unwrap(), "");
    }

    #[test]
    fn test_substitution_at_both_ends() {
        let mut args = ArgList::new();
        args.push(1u8);
        args.push(2u8);
        let fmt = Formatter::new("{0}mid{1}", args);
        assert_eq!(fmt.render_to_string().unwrap(), "1mid2");
    }

    #[test]
    fn test_adjacent_and_repeated_placeholders() {
        let mut args = ArgList::new();
        args.push("a");
        args.push("b");
        let fmt = Formatter::new("{0}{1}{0}", args);
        assert_eq!(fmt.render_to_string().unwrap(), "aba");
    }

    #[test]
    fn test_out_of_range_emits_nothing() {
        let mut args = ArgList::new();
        args.push(1u8);
        args.push(2u8);
        let fmt = Formatter::new("[{5}]", args);
        assert_eq!(fmt.render_to_string().unwrap(), "[]");
    }

    #[test]
    fn test_empty_braces_reference_argument_zero() {
        let mut args = ArgList::new();
        args.push(7u8);
        let fmt = Formatter::new("{}", args);
        assert_eq!(fmt.render_to_string().unwrap(), "7");
    }

    #[test]
    fn test_unterminated_brace_emits_tail_verbatim() {
        let mut args = ArgList::new();
        args.push(1u8);
        let fmt = Formatter::new("a{0} b{1,3:x", args);
        assert_eq!(fmt.render_to_string().unwrap(), "a1 b{1,3:x");
    }

    #[test]
    fn test_lone_open_brace_at_end() {
        let fmt = Formatter::new("tail{", ArgList::new());
        assert_eq!(fmt.render_to_string().unwrap(), "tail{");
    }

    #[test]
    fn test_lone_close_brace_is_literal() {
        let fmt = Formatter::new("a}b", ArgList::new());
        assert_eq!(fmt.render_to_string().unwrap(), "a}b");
    }

    #[test]
    fn test_no_state_leak_between_placeholders() {
        let mut args = ArgList::new();
        args.push(255u32);
        args.push(255u32);
        let fmt = Formatter::new("{0:x} {1}", args);
        assert_eq!(fmt.render_to_string().unwrap(), "ff 255");
    }

    #[test]
    fn test_sink_state_intact_after_render() {
        let mut args = ArgList::new();
        args.push(255u32);
        let fmt = Formatter::new("{0,9:X2}", args);
        let mut sink = BufferSink::new();
        fmt.render(&mut sink).unwrap();
        assert_eq!(*sink.state(), SinkState::default());
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut args = ArgList::new();
        args.push(3u8);
        let fmt = Formatter::new("={0}", args);
        assert_eq!(fmt.render_to_string().unwrap(), "=3");
        assert_eq!(fmt.render_to_string().unwrap(), "=3");
        assert_eq!(fmt.template(), "={0}");
        assert_eq!(fmt.arg_count(), 1);
    }

    #[test]
    fn test_display_renders() {
        let mut args = ArgList::new();
        args.push("x");
        let fmt = Formatter::new("<{0}>", args);
        assert_eq!(fmt.to_string(), "<x>");
        assert_eq!(format!("{fmt}"), "<x>");
    }

    #[test]
    fn test_multibyte_literals() {
        let mut args = ArgList::new();
        args.push("λ");
        let fmt = Formatter::new("α{0}ω", args);
        assert_eq!(fmt.render_to_string().unwrap(), "αλω");
    }
}
