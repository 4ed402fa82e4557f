#![forbid(unsafe_code, future_incompatible)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    missing_copy_implementations,
    unused_qualifications,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]
#![warn(clippy::pedantic)]
//! A guided tour of everyday Rust
//!
//! The narrated walkthrough lives in [`tour`]. The reusable pieces it demonstrates are:
//!
//! * [`Sequence`], a bounded, restartable lazy sequence of integers
//! * [`Publisher`], an ordered registry of callbacks that are invoked on [`Publisher::trigger`]
//! * [`Scoped`], a value whose cleanup runs exactly once, on [`Scoped::release`] or on drop
//! * [`Delay`], a one-shot timer
//!
//! ```
//! use primer::{Publisher, Scoped, Sequence};
//! use std::sync::{
//!     atomic::{AtomicUsize, Ordering},
//!     Arc,
//! };
//!
//! assert_eq!(Sequence::new(5).iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let mut publisher = Publisher::new();
//! publisher.subscribe({
//!     let calls = Arc::clone(&calls);
//!     move |_| {
//!         calls.fetch_add(1, Ordering::Relaxed);
//!     }
//! });
//! publisher.trigger();
//! assert_eq!(calls.load(Ordering::Relaxed), 1);
//!
//! let cleanups = Arc::new(AtomicUsize::new(0));
//! {
//!     let cleanups = Arc::clone(&cleanups);
//!     let _file = Scoped::acquire("resource", move |_| {
//!         cleanups.fetch_add(1, Ordering::Relaxed);
//!     });
//! }
//! assert_eq!(cleanups.load(Ordering::Relaxed), 1);
//! ```

mod error;
pub use error::{Error, Result};

mod implementation;
pub use implementation::{
    delay, Delay, Iter, Publisher, Scoped, Sequence, SequenceStream, Signal, SubscriptionId,
};

pub mod tour;
