//! Question bank types and configuration
//!
//! This module contains the question bank structures for the quiz engine:
//! the top-level [`config::Quiz`] collection, the multiple choice question
//! records with their rendering messages, and the built-in question bank.

pub mod builtin;
pub mod config;
pub mod multiple_choice;
