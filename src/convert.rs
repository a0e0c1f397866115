//! This module implements the contract converters: adapters that take a
//! function written for one calling convention and return a wrapper obeying
//! another, routing every failure through the new contract's native error
//! channel.

mod asyncify;
mod callbackify;
mod promisify;

pub use asyncify::{asyncify, Asyncified};
pub use callbackify::{callbackify, Callbackified, Relay};
pub use promisify::{promisify, promisify_sync, Promisified, PromisifiedSync};
