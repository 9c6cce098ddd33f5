//! Validation checks for parsed tartans.
//!
//! Each check takes a `&Tartan` and returns a `ValidationResult`.

use crate::parser::{ColourDef, Tartan};

use super::warning::{Diagnostic, ValidationResult, WarningKind};

/// Number of hex digits in a well-formed colour value.
const HEX_DIGITS: usize = 6;

/// The earlier definition of the same letter, if `def` repeats one.
fn earlier_definition<'a>(tartan: &'a Tartan, def: &ColourDef) -> Option<&'a ColourDef> {
    tartan
        .colour_defs
        .iter()
        .take_while(|d| d.index < def.index)
        .find(|d| d.letter == def.letter)
}

/// Check for letters defined more than once.
///
/// Lookups use the first definition, so later ones never reach the image.
pub fn check_duplicate_letters(tartan: &Tartan) -> ValidationResult {
    let mut result = ValidationResult::new();

    for def in &tartan.colour_defs {
        if let Some(first) = earlier_definition(tartan, def) {
            result.push(Diagnostic::new(
                WarningKind::DuplicateColour,
                def.line,
                format!(
                    "Colour '{}' on line {} is already defined on line {}",
                    def.letter, def.line, first.line
                ),
            ));
        }
    }

    result
}

/// Check for colour values that are not exactly six hex digits.
pub fn check_colour_digits(tartan: &Tartan) -> ValidationResult {
    let mut result = ValidationResult::new();

    for def in &tartan.colour_defs {
        if def.digits != HEX_DIGITS {
            result.push(Diagnostic::new(
                WarningKind::ColourDigits,
                def.line,
                format!(
                    "Colour '{}' on line {} has {} hex digits, expected {} (read as {})",
                    def.letter, def.line, def.digits, HEX_DIGITS, def.colour
                ),
            ));
        }
    }

    result
}

/// Check for colours no thread uses.
///
/// Repeated letters are left to `check_duplicate_letters`.
pub fn check_unused_colours(tartan: &Tartan) -> ValidationResult {
    let mut result = ValidationResult::new();

    for def in &tartan.colour_defs {
        if earlier_definition(tartan, def).is_some() || tartan.uses(def.index) {
            continue;
        }
        result.push(Diagnostic::new(
            WarningKind::UnusedColour,
            def.line,
            format!(
                "Colour '{}' on line {} is not used by any pattern line",
                def.letter, def.line
            ),
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tartan;

    fn kinds(result: &ValidationResult) -> Vec<WarningKind> {
        result.iter().map(|d| d.kind).collect()
    }

    #[test]
    fn test_clean_tartan() {
        let tartan = parse_tartan("#ff0000 r\n#00ff00 g\nr2g2\n", 1).unwrap();
        assert!(check_duplicate_letters(&tartan).is_empty());
        assert!(check_colour_digits(&tartan).is_empty());
        assert!(check_unused_colours(&tartan).is_empty());
    }

    #[test]
    fn test_duplicate_letter() {
        let tartan = parse_tartan("#ff0000 r\n#00ff00 R\nr2\n", 1).unwrap();
        let result = check_duplicate_letters(&tartan);

        assert_eq!(kinds(&result), vec![WarningKind::DuplicateColour]);
        assert_eq!(result.iter().next().map(|d| d.line), Some(2));
        let message = &result.iter().next().unwrap().message;
        assert!(message.contains("line 2"));
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_duplicate_is_not_also_unused() {
        let tartan = parse_tartan("#ff0000 r\n#00ff00 r\nr2\n", 1).unwrap();
        assert!(check_unused_colours(&tartan).is_empty());
    }

    #[test]
    fn test_short_colour() {
        let tartan = parse_tartan("#f00 r\nr2\n", 1).unwrap();
        let result = check_colour_digits(&tartan);

        assert_eq!(kinds(&result), vec![WarningKind::ColourDigits]);
        assert!(result.iter().next().unwrap().message.contains("#000f00"));
    }

    #[test]
    fn test_unused_colour() {
        let tartan = parse_tartan("#ff0000 r\n#00ff00 g\n#0000ff b\nr2g2\n", 1).unwrap();
        let result = check_unused_colours(&tartan);

        assert_eq!(result.len(), 1);
        assert!(result.iter().next().unwrap().message.contains("'b' on line 3"));
    }

    #[test]
    fn test_weft_only_colour_is_used() {
        let tartan = parse_tartan("#ff0000 r\n#00ff00 g\nr2\ng2\n", 1).unwrap();
        assert!(check_unused_colours(&tartan).is_empty());
    }
}
