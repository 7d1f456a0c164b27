//! Infrastructure layer — concrete implementations of application port
//! traits.
//!
//! This module contains all I/O-performing code: process execution and
//! filesystem access. Imports from `crate::domain` and
//! `crate::application::ports` are allowed; imports from `crate::output`
//! are forbidden.

pub mod command_runner;
pub mod fs;
