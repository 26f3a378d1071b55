//! Per-type custom render hooks.
//!
//! A hook replaces the default "apply state, then insert" behavior for
//! every captured value of one type. Hooks are plain function pointers
//! resolved at capture time, either from an explicit [`Hooks`] registry or
//! from the process-global one.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::sink::{RenderError, Sink};

/// Custom render function for values of type `T`.
///
/// Receives the captured value, the sink, and the directive's width,
/// specifier, and precision. The state guard wrapping the call restores
/// the sink's state afterwards regardless of the outcome, so a hook may
/// adjust state freely.
pub type HookFn<T> = fn(&T, &mut dyn Sink, usize, char, usize) -> Result<(), RenderError>;

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Render hooks keyed by argument type.
#[derive(Default)]
pub struct Hooks {
    map: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `hook` for `T`, replacing any previous one.
    pub fn set<T: 'static>(&mut self, hook: HookFn<T>) {
        self.map.insert(TypeId::of::<T>(), Box::new(hook));
    }

    /// The hook registered for `T`, if any.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<HookFn<T>> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|hook| hook.downcast_ref::<HookFn<T>>())
            .copied()
    }

    /// Removes the hook for `T`, reporting whether one was set.
    pub fn clear<T: 'static>(&mut self) -> bool {
        self.map.remove(&TypeId::of::<T>()).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").field("len", &self.map.len()).finish()
    }
}

// ---------------------------------------------------------------------------
// Process-global registry
// ---------------------------------------------------------------------------

static GLOBAL_HOOKS: OnceLock<RwLock<Hooks>> = OnceLock::new();

fn global_hooks() -> &'static RwLock<Hooks> {
    GLOBAL_HOOKS.get_or_init(|| RwLock::new(Hooks::new()))
}

/// Registers a process-global hook for `T`, consulted by
/// [`ArgList::push`](crate::ArgList::push) whenever no explicit registry
/// is given. Affects formatters built after the call; already-built
/// formatters keep the resolution made at capture time.
pub fn register<T: 'static>(hook: HookFn<T>) {
    global_hooks().write().set(hook);
}

/// Removes the process-global hook for `T`, reporting whether one was set.
pub fn unregister<T: 'static>() -> bool {
    global_hooks().write().clear::<T>()
}

pub(crate) fn lookup_global<T: 'static>() -> Option<HookFn<T>> {
    global_hooks().read().get::<T>()
}
