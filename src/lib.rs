//! Q-less Grid
//!
//! Fills crossword grid templates from a roll of twelve letter dice, and
//! curates the template library and word list from batch runs.
//!
//! # Quick Start
//!
//! ```rust
//! use qless_grid::core::{GridTemplate, Roll, Slot};
//! use qless_grid::solver::{SearchLimits, prioritize, solve};
//! use qless_grid::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
//! let roll = Roll::new("mmooddhckpbh").unwrap();
//! let template = GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(0, 2, 0)]).unwrap();
//!
//! let words = prioritize(&roll, &dictionary, 5);
//! let outcome = solve(&template, &roll, &words, SearchLimits::UNLIMITED);
//! assert!(outcome.solution.is_some());
//! ```

// Core domain types
pub mod core;

// Input errors
pub mod error;

// Search and caching
pub mod solver;

// Word sources
pub mod wordlists;

// Template library
pub mod templates;

// Roll generation and loading
pub mod rolls;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
