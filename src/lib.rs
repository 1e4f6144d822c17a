//! linecfg: format-preserving settings files
//!
//! A library for reading and editing line-oriented `name = value # comment`
//! settings files while keeping every untouched byte in place.

pub mod config;
pub mod settings;
pub mod storage;
