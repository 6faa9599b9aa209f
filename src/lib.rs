#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bank;
mod board;
mod common;
mod config;
mod letter;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod rating;
mod round;
#[cfg(feature = "std")]
pub mod runner;
mod session;
mod slots;
pub mod solver;
mod timer;
#[cfg(feature = "std")]
pub mod ui;
mod words;

pub use bank::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use letter::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, parse_level, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use rating::*;
pub use round::*;
#[cfg(feature = "std")]
pub use runner::{NullListener, SessionListener, SessionRunner, ShutdownHandle};
pub use session::*;
pub use slots::*;
pub use timer::*;
pub use words::*;
