//! This module implements the lifecycle wrappers: one-shot state machines
//! guarding a held function. Each wrapper starts active, forwards calls to
//! the held function, and retires exactly once; the transition is
//! irreversible and a retired wrapper answers every call with `None`.

mod cancelable;
mod expirify;
mod once;

pub use cancelable::{cancelable, Cancelable};
pub use expirify::{expirify, expirify_with, Expirified, InvalidTimeout};
pub use once::{once, Once};

/// Guard state of a lifecycle wrapper. Retiring drops the held function, so
/// resources it captured are released at the transition.
#[derive(Debug)]
enum State<F> {
    Active(F),
    Retired,
}

impl<F> State<F> {
    /// Takes the held function out, retiring the wrapper.
    fn take(&mut self) -> Option<F> {
        match std::mem::replace(self, State::Retired) {
            State::Active(function) => Some(function),
            State::Retired => None,
        }
    }

    fn retire(&mut self) {
        *self = State::Retired;
    }

    fn as_active(&mut self) -> Option<&mut F> {
        match self {
            State::Active(function) => Some(function),
            State::Retired => None,
        }
    }

    fn is_active(&self) -> bool {
        matches!(self, State::Active(_))
    }
}
