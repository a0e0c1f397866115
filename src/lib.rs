//! Higher-order adapters that convert fallible functions between calling
//! conventions: synchronous (return `Result`, maybe panic), callback-last
//! (report through a trailing completion handle) and future-returning
//! (yield a deferred result that settles exactly once). Three lifecycle
//! wrappers complete the set: time-limited, cancelable and run-once.
//!
//! Whatever convention a function is converted into, its failure always
//! travels through the new contract's native error channel: a callback
//! argument or a rejected listener, never a stray panic and never silence.
//! Panics from the wrapped function are contained and surfaced as
//! [`callback::Failure::Panicked`].
//!
//! ```
//! use wrappy::once;
//!
//! let mut add = once(|(a, b): (i32, i32)| a + b);
//! assert_eq!(add.call((2, 3)), Some(5));
//! assert_eq!(add.call((10, 10)), None);
//! ```

#![warn(missing_docs)]

mod panic;

pub mod callback;

pub mod convert;

pub mod lifecycle;

pub mod time;

pub use convert::{
    asyncify, callbackify, promisify, promisify_sync, Asyncified, Callbackified,
    Promisified, PromisifiedSync, Relay,
};
pub use lifecycle::{
    cancelable, expirify, expirify_with, once, Cancelable, Expirified,
    InvalidTimeout, Once,
};
