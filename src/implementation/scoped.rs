use std::{
    fmt::{self, Debug, Formatter},
    ops::{Deref, DerefMut},
};

/// A value paired with a cleanup action that runs exactly once.
///
/// Cleanup runs on the first call to [`Scoped::release`], or when the `Scoped` is dropped if it
/// was never released. Because drop also runs while unwinding, the cleanup is guaranteed on every
/// exit path from the owning scope.
///
/// `Scoped` implements [`Deref`] and [`DerefMut`] to the held value.
///
/// ```
/// use primer::Scoped;
/// let mut lines = Vec::new();
/// {
///     let mut connection = Scoped::acquire(String::from("open"), |state: &mut String| {
///         state.replace_range(.., "closed");
///     });
///     assert_eq!(*connection, "open");
///     assert!(connection.release());
///     assert!(!connection.release());
///     lines.push(connection.clone());
/// }
/// assert_eq!(lines, ["closed"]);
/// ```
pub struct Scoped<T, F>
where
    F: FnOnce(&mut T),
{
    value: T,
    cleanup: Option<F>,
}

impl<T, F> Scoped<T, F>
where
    F: FnOnce(&mut T),
{
    /// Take ownership of `value`, arranging for `cleanup` to run on it exactly once.
    pub fn acquire(value: T, cleanup: F) -> Self {
        log::trace!("acquired");
        Self {
            value,
            cleanup: Some(cleanup),
        }
    }

    /// Run the cleanup action if it has not already run.
    ///
    /// Returns true if this call ran the cleanup, false if it had already been released.
    #[allow(clippy::must_use_candidate)] // It's fine not to care who released it.
    pub fn release(&mut self) -> bool {
        if let Some(cleanup) = self.cleanup.take() {
            log::trace!("releasing");
            cleanup(&mut self.value);
            true
        } else {
            log::trace!("was already released");
            false
        }
    }

    /// Determine if the cleanup action has already run
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.cleanup.is_none()
    }
}

impl<T, F> Drop for Scoped<T, F>
where
    F: FnOnce(&mut T),
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<T, F> Deref for Scoped<T, F>
where
    F: FnOnce(&mut T),
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T, F> DerefMut for Scoped<T, F>
where
    F: FnOnce(&mut T),
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

impl<T: Debug, F> Debug for Scoped<T, F>
where
    F: FnOnce(&mut T),
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped")
            .field("value", &self.value)
            .field("released", &self.is_released())
            .finish()
    }
}

impl<T, U, F> PartialEq<U> for Scoped<T, F>
where
    T: PartialEq<U>,
    F: FnOnce(&mut T),
{
    fn eq(&self, other: &U) -> bool {
        self.value.eq(other)
    }
}
