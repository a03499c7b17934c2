#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]

pub mod app;
pub mod canvas;
pub mod clock;
pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod font;
pub mod panel;
pub mod pixmap;
pub mod renderer;
pub mod settings;

pub use error::{Error, Result};
