#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(non_camel_case_types)]
#![cfg_attr(debug_assertions, allow(dead_code))]

#[macro_use]
extern crate alsnd_diagnostics;

#[cfg(test)]
#[macro_use]
extern crate alsnd_test;

pub mod config;
pub mod res;
pub mod sound;
pub mod sound_manager;

pub use alsnd_audio_backend::Audio_Error;
pub use config::Sound_Manager_Config;
pub use res::Sound_Id;
pub use sound_manager::Sound_Manager;
