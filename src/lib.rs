pub mod application;
pub mod commands;
pub mod package;
pub mod runtime;
