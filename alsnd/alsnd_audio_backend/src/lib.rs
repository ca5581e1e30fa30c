#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate alsnd_diagnostics;

pub mod decode;
pub mod error;
pub mod sound;

pub use error::Audio_Error;
