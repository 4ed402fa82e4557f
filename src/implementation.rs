mod sequence;
pub use sequence::{Iter, Sequence, SequenceStream};

mod publisher;
pub use publisher::{Publisher, Signal, SubscriptionId};

mod scoped;
pub use scoped::Scoped;

pub mod delay;
pub use delay::Delay;
