//! Main module for gedcom library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod query;
pub mod tags;

#[cfg(test)]
pub mod testing;
