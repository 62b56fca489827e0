use std::fmt;
use std::ops::{Deref, DerefMut};

/// Holds the result a bare break produces.
///
/// A context is created by the outermost call and handed down by `&mut` to
/// every nested traversal. Each traversal opens a [`DefaultScope`] with its
/// own default; when the scope ends the previous default is put back, so an
/// inner traversal never leaks its default into the caller.
///
/// # Examples
///
/// ```
/// use for_each_break::BreakContext;
///
/// let mut ctx = BreakContext::new();
/// ctx.set_default(0);
/// {
///     let mut inner = ctx.scope(None);
///     inner.set_default(100);
///     assert_eq!(inner.default_result(), Some(&100));
/// }
/// assert_eq!(ctx.default_result(), Some(&0));
/// ```
pub struct BreakContext<T> {
    default: Option<T>,
}

impl<T> BreakContext<T> {
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Create a context whose default is already set.
    pub fn with_default(value: T) -> Self {
        Self {
            default: Some(value),
        }
    }

    /// Set the default result, returning the previous one.
    pub fn set_default(&mut self, value: T) -> Option<T> {
        self.default.replace(value)
    }

    /// Clear the default result, returning the previous one.
    pub fn clear_default(&mut self) -> Option<T> {
        self.default.take()
    }

    pub fn default_result(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Take the default result, leaving none configured.
    pub fn take_default(&mut self) -> Option<T> {
        self.default.take()
    }

    /// Resolve a break: the payload if one was given, else the default.
    pub fn resolve(&mut self, payload: Option<T>) -> Option<T> {
        match payload {
            Some(value) => Some(value),
            None => self.take_default(),
        }
    }

    /// Install `default` until the returned scope is dropped.
    pub fn scope(&mut self, default: Option<T>) -> DefaultScope<'_, T> {
        let saved = std::mem::replace(&mut self.default, default);
        DefaultScope { ctx: self, saved }
    }
}

impl<T> Default for BreakContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BreakContext<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakContext")
            .field("default", &self.default)
            .finish()
    }
}

/// A pushed default result. Dropping the scope restores the default that was
/// active when it was opened, whether the traversal completed, broke, or
/// unwound.
pub struct DefaultScope<'c, T> {
    ctx: &'c mut BreakContext<T>,
    saved: Option<T>,
}

impl<T> Deref for DefaultScope<'_, T> {
    type Target = BreakContext<T>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<T> DerefMut for DefaultScope<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<T> Drop for DefaultScope<'_, T> {
    fn drop(&mut self) {
        self.ctx.default = self.saved.take();
    }
}
