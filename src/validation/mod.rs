//! Validation for parsed tartans.
//!
//! Runs a suite of checks that catch definitions which parse but probably
//! do not weave what their author meant. Every finding is a warning;
//! hard errors are reported by the parser.

mod checks;
mod warning;

pub use warning::{Diagnostic, ValidationResult, WarningKind};

use crate::output::Printer;
use crate::parser::Tartan;

/// Run all validation checks against a tartan.
pub fn validate_tartan(tartan: &Tartan) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_duplicate_letters(tartan));
    result.merge(checks::check_colour_digits(tartan));
    result.merge(checks::check_unused_colours(tartan));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        printer.warning(&d.message, d.code());
        if let Some(help) = d.help() {
            printer.help(help);
        }
    }
}
