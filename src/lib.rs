//#![warn(missing_docs)]

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod error;
pub use error::*;

pub mod sink;
pub use sink::*;

pub mod buffer;
pub use buffer::*;

pub mod dry_run;
pub use dry_run::*;

pub mod emitter;
pub use emitter::*;

pub mod encode;
pub use encode::*;

pub mod preview;
pub use preview::*;
