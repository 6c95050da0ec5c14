//! Terminal output formatting
//!
//! Display utilities for CLI results and grid pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_statistics, print_curation, print_enumeration, print_lookup_reports,
    print_solve_result, print_template_ranks,
};
pub use formatters::render_grid;
