#![cfg_attr(not(feature = "std"), no_std)]

pub mod window;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod errors;
#[cfg(feature = "std")]
pub mod shell;

pub use window::{share, ByteWindow, Storage};
