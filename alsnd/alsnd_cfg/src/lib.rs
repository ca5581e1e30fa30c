#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate alsnd_diagnostics;

pub mod config;
pub mod parsing;
pub mod value;

pub use config::Config;
pub use value::Cfg_Value;
