pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod kubectx;
pub mod output;

#[cfg(test)]
pub mod testing;
