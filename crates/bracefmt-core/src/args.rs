//! Argument capture.
//!
//! Capture turns a heterogeneous list of values into an ordered sequence of
//! type-erased cells, each owning one copy of its value. Capture is eager:
//! it happens once when the list is built, so a placeholder may reference
//! the same position any number of times without re-evaluating the source
//! expression. Hook resolution also happens here, at capture time: an
//! explicit registry wins over the process-global one, which wins over the
//! type's [`Render`] default.

use std::fmt;

use crate::directive::Directive;
use crate::hooks::{self, HookFn, Hooks};
use crate::render::Render;
use crate::sink::{RenderError, Sink, StateGuard};

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// One captured argument behind a uniform render operation.
pub(crate) trait ErasedArg: Send + Sync {
    /// Renders the owned value under `directive`, inside a state guard.
    fn format(&self, sink: &mut dyn Sink, directive: &Directive) -> Result<(), RenderError>;
}

/// Cell using the type's [`Render`] implementation.
struct DefaultCell<T> {
    value: T,
}

impl<T: Render + Send + Sync> ErasedArg for DefaultCell<T> {
    fn format(&self, sink: &mut dyn Sink, directive: &Directive) -> Result<(), RenderError> {
        let mut guard = StateGuard::new(sink);
        guard.apply(directive);
        self.value.render(guard.sink())
    }
}

/// Cell carrying a custom hook resolved at capture time.
struct HookCell<T> {
    value: T,
    hook: HookFn<T>,
}

impl<T: Send + Sync> ErasedArg for HookCell<T> {
    fn format(&self, sink: &mut dyn Sink, directive: &Directive) -> Result<(), RenderError> {
        // the guard is active but the directive is not pre-applied; the
        // hook receives the raw fields and decides what to honor
        let mut guard = StateGuard::new(sink);
        (self.hook)(
            &self.value,
            guard.sink(),
            directive.width,
            directive.specifier,
            directive.precision,
        )
    }
}

// ---------------------------------------------------------------------------
// Argument list
// ---------------------------------------------------------------------------

/// Ordered, fixed-length sequence of captured arguments.
///
/// Position `i` always corresponds to the `i`-th capture, no matter how
/// many times or in which order placeholders reference it.
#[derive(Default)]
pub struct ArgList {
    cells: Vec<Box<dyn ErasedArg>>,
}

impl ArgList {
    #[must_use]
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Captures `value` at the next position.
    ///
    /// A process-global hook registered for `T` takes precedence over the
    /// type's [`Render`] implementation.
    pub fn push<T>(&mut self, value: T)
    where
        T: Render + Send + Sync + 'static,
    {
        match hooks::lookup_global::<T>() {
            Some(hook) => self.cells.push(Box::new(HookCell { value, hook })),
            None => self.cells.push(Box::new(DefaultCell { value })),
        }
    }

    /// Captures `value` with an explicit hook, bypassing both the global
    /// registry and the type's default. Works for types without a
    /// [`Render`] implementation.
    pub fn push_with<T>(&mut self, value: T, hook: HookFn<T>)
    where
        T: Send + Sync + 'static,
    {
        self.cells.push(Box::new(HookCell { value, hook }));
    }

    /// Captures `value`, resolving its hook against `registry` first, then
    /// the process-global registry, then the type's default.
    pub fn push_using<T>(&mut self, value: T, registry: &Hooks)
    where
        T: Render + Send + Sync + 'static,
    {
        match registry.get::<T>() {
            Some(hook) => self.cells.push(Box::new(HookCell { value, hook })),
            None => self.push(value),
        }
    }

    /// Number of captured arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&dyn ErasedArg> {
        self.cells.get(index).map(|cell| &**cell)
    }
}

impl fmt::Debug for ArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgList")
            .field("len", &self.cells.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::parse_directive;
    use crate::sink::{BufferSink, SinkState};

    fn format_one(args: &ArgList, index: usize, body: &str) -> String {
        let mut sink = BufferSink::new();
        if let Some(cell) = args.get(index) {
            cell.format(&mut sink, &parse_directive(body)).unwrap();
        }
        sink.into_string()
    }

    #[test]
    fn test_capture_preserves_order() {
        let mut args = ArgList::new();
        args.push("a");
        args.push(1u8);
        args.push(true);
        assert_eq!(args.len(), 3);
        assert_eq!(format_one(&args, 0, "0"), "a");
        assert_eq!(format_one(&args, 1, "1"), "1");
        assert_eq!(format_one(&args, 2, "2"), "true");
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let mut args = ArgList::new();
        args.push(1i32);
        assert!(args.get(5).is_none());
        assert!(ArgList::new().get(0).is_none());
    }

    #[test]
    fn test_default_cell_applies_directive() {
        let mut args = ArgList::new();
        args.push(42i32);
        assert_eq!(format_one(&args, 0, "0:X"), "2A");
        assert_eq!(format_one(&args, 0, "0,5"), "   42");
    }

    #[test]
    fn test_default_cell_restores_state() {
        let mut args = ArgList::new();
        args.push(42i32);
        let mut sink = BufferSink::new();
        args.get(0)
            .unwrap()
            .format(&mut sink, &parse_directive("0,8:X2"))
            .unwrap();
        assert_eq!(*sink.state(), SinkState::default());
    }

    #[test]
    fn test_push_with_uses_hook() {
        fn reversed(
            value: &String,
            sink: &mut dyn Sink,
            _width: usize,
            _specifier: char,
            _precision: usize,
        ) -> Result<(), RenderError> {
            sink.write_str(&value.chars().rev().collect::<String>())
        }
        let mut args = ArgList::new();
        args.push_with("abc".to_string(), reversed);
        assert_eq!(format_one(&args, 0, "0"), "cba");
    }

    #[test]
    fn test_push_with_allows_renderless_types() {
        struct Opaque {
            id: u32,
        }
        fn by_id(
            value: &Opaque,
            sink: &mut dyn Sink,
            _width: usize,
            _specifier: char,
            _precision: usize,
        ) -> Result<(), RenderError> {
            sink.write_str(&format!("#{}", value.id))
        }
        let mut args = ArgList::new();
        args.push_with(Opaque { id: 9 }, by_id);
        assert_eq!(format_one(&args, 0, "0"), "#9");
    }

    #[test]
    fn test_hook_receives_directive_fields() {
        fn echo(
            _value: &u8,
            sink: &mut dyn Sink,
            width: usize,
            specifier: char,
            precision: usize,
        ) -> Result<(), RenderError> {
            sink.write_str(&format!("{width}/{specifier}/{precision}"))
        }
        let mut args = ArgList::new();
        args.push_with(0u8, echo);
        assert_eq!(format_one(&args, 0, "0,7:f3"), "7/f/3");
    }

    #[test]
    fn test_hook_failure_restores_state() {
        fn failing(
            _value: &u8,
            sink: &mut dyn Sink,
            _width: usize,
            _specifier: char,
            _precision: usize,
        ) -> Result<(), RenderError> {
            sink.state_mut().width = 77;
            sink.state_mut().uppercase = true;
            Err(RenderError::Hook("boom".to_string()))
        }
        let mut args = ArgList::new();
        args.push_with(1u8, failing);
        let mut sink = BufferSink::new();
        let result = args
            .get(0)
            .unwrap()
            .format(&mut sink, &parse_directive("0,9:X"));
        assert!(result.is_err());
        assert_eq!(*sink.state(), SinkState::default());
    }

    #[test]
    fn test_push_using_prefers_local_registry() {
        fn stars(
            _value: &i64,
            sink: &mut dyn Sink,
            _width: usize,
            _specifier: char,
            _precision: usize,
        ) -> Result<(), RenderError> {
            sink.write_str("***")
        }
        let mut registry = Hooks::new();
        registry.set::<i64>(stars);
        let mut args = ArgList::new();
        args.push_using(5i64, &registry);
        args.push_using(6u16, &registry);
        assert_eq!(format_one(&args, 0, "0"), "***");
        assert_eq!(format_one(&args, 1, "1"), "6");
    }

    #[test]
    fn test_capture_resolves_hooks_eagerly() {
        struct Tagged(u8);
        impl Render for Tagged {
            fn render(&self, sink: &mut dyn Sink) -> Result<(), RenderError> {
                sink.write_str(&self.0.to_string())
            }
        }
        fn hooked(
            _value: &Tagged,
            sink: &mut dyn Sink,
            _width: usize,
            _specifier: char,
            _precision: usize,
        ) -> Result<(), RenderError> {
            sink.write_str("hooked")
        }

        let mut before = ArgList::new();
        before.push(Tagged(1));
        hooks::register::<Tagged>(hooked);
        let mut after = ArgList::new();
        after.push(Tagged(2));
        let early = format_one(&before, 0, "0");
        let late = format_one(&after, 0, "0");
        hooks::unregister::<Tagged>();
        assert_eq!(early, "1");
        assert_eq!(late, "hooked");
    }
}
