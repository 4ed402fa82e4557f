//! A one-shot timer
//!
//! The timer is backed by `async_io::Timer` by default, or by `tokio::time::Sleep` when the
//! `tokio` feature is enabled.

use std::{
    future::Future,
    pin::Pin,
    task::{ready, Context, Poll},
    time::Duration,
};

#[cfg(not(feature = "tokio"))]
type Timer = async_io::Timer;

#[cfg(feature = "tokio")]
type Timer = tokio::time::Sleep;

#[cfg(not(feature = "tokio"))]
fn start(duration: Duration) -> Timer {
    Timer::after(duration)
}

#[cfg(feature = "tokio")]
fn start(duration: Duration) -> Timer {
    tokio::time::sleep(duration)
}

/// Returns a [`Delay`] that completes once `duration` has elapsed.
///
/// The clock starts on first poll, not on construction.
#[must_use]
pub fn after(duration: Duration) -> Delay {
    Delay::new(duration)
}

pin_project_lite::pin_project! {
    /// A [`Future`] that completes once, after a fixed duration.
    ///
    /// This type can also be used in blocking contexts with [`Delay::block`]
    #[derive(Debug)]
    pub struct Delay {
        duration: Duration,
        #[pin]
        timer: Option<Timer>,
    }
}

impl Delay {
    /// Construct a new `Delay` of `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            timer: None,
        }
    }

    /// The total duration of this delay
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Blocks the current thread until the delay has elapsed.
    ///
    /// Do not use this in async contexts. Instead, await this [`Delay`].
    ///
    /// # Errors
    ///
    /// With the `tokio` feature, returns an error if a runtime cannot be built.
    #[cfg(not(feature = "tokio"))]
    pub fn block(self) -> crate::Result<()> {
        futures_lite::future::block_on(self);
        Ok(())
    }

    /// Blocks the current thread until the delay has elapsed.
    ///
    /// Do not use this in async contexts. Instead, await this [`Delay`].
    ///
    /// # Errors
    ///
    /// Returns an error if a runtime cannot be built.
    #[cfg(feature = "tokio")]
    pub fn block(self) -> crate::Result<()> {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?
            .block_on(self);
        Ok(())
    }
}

impl Future for Delay {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        if this.timer.is_none() {
            log::trace!("starting {:?} delay", this.duration);
            this.timer.set(Some(start(*this.duration)));
        }

        if let Some(timer) = this.timer.as_pin_mut() {
            ready!(timer.poll(cx));
        }
        log::trace!("{:?} delay elapsed", this.duration);
        Poll::Ready(())
    }
}
