//! Built-in conformance suite for the formatting engine.
//!
//! The suite pins the externally observable contract: placeholder
//! substitution, width padding, specifier-driven bases and float styles,
//! silent degradation for bad directives, and state isolation between
//! insertions. `harness verify` runs it alongside any on-disk fixtures.

use crate::fixtures::{ArgValue, FixtureCase, FixtureSet};

/// Schema version stamped into generated fixture sets.
pub const FIXTURE_VERSION: &str = "1.0";

fn case(name: &str, template: &str, args: Vec<ArgValue>, expected: &str) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        template: template.to_string(),
        args,
        expected: expected.to_string(),
    }
}

/// The canonical built-in fixture set.
#[must_use]
pub fn builtin_suite() -> FixtureSet {
    use ArgValue::{Bool, Char, Float, Int, Str, Uint};

    let cases = vec![
        case("empty_template", "", vec![], ""),
        case("literal_only", "no placeholders", vec![], "no placeholders"),
        case(
            "mixed_literal_and_hex_upper",
            "Test: {0:X}, {1}",
            vec![Int(42), Str(String::from("sup"))],
            "Test: 2A, sup",
        ),
        case(
            "width_pads_left",
            "{0,6:d}",
            vec![Int(7)],
            "     7",
        ),
        case(
            "width_narrower_than_value",
            "{0,2}",
            vec![Int(12345)],
            "12345",
        ),
        case(
            "out_of_range_index_is_silent",
            "{5}",
            vec![Int(1), Int(2)],
            "",
        ),
        case(
            "argument_reuse",
            "{0} + {0} = {1}",
            vec![Int(2), Int(4)],
            "2 + 2 = 4",
        ),
        case(
            "argument_reorder",
            "{1} {0}",
            vec![Str(String::from("world")), Str(String::from("hello"))],
            "hello world",
        ),
        case("hex_lower", "{0:x}", vec![Uint(255)], "ff"),
        case("hex_upper", "{0:X}", vec![Uint(255)], "FF"),
        case("octal", "{0:o}", vec![Uint(8)], "10"),
        case(
            "negative_int_hex_is_twos_complement",
            "{0:x}",
            vec![Int(-1)],
            "ffffffffffffffff",
        ),
        case(
            "scientific_lower",
            "{0:e}",
            vec![Float(1500.0)],
            "1.500000e+03",
        ),
        case(
            "scientific_upper",
            "{0:E}",
            vec![Float(1500.0)],
            "1.500000E+03",
        ),
        case(
            "fixed_precision",
            "{0:f2}",
            vec![Float(3.14159)],
            "3.14",
        ),
        case("general_float_is_shortest", "{0}", vec![Float(2.5)], "2.5"),
        case(
            "width_with_hex",
            "{0,8:X}",
            vec![Uint(255)],
            "      FF",
        ),
        case(
            "state_isolated_between_insertions",
            "{0:x}{0}{0:X}",
            vec![Uint(255)],
            "ff255FF",
        ),
        case(
            "malformed_body_falls_back_to_defaults",
            "{zz}",
            vec![Int(9)],
            "9",
        ),
        case("empty_braces_use_index_zero", "{}", vec![Str(String::from("first"))], "first"),
        case(
            "lone_close_brace_is_literal",
            "}{0}",
            vec![Int(3)],
            "}3",
        ),
        case(
            "unterminated_directive_emits_tail",
            "v={0} {1,4:x",
            vec![Int(5), Int(9)],
            "v=5 {1,4:x",
        ),
        case("bool_ignores_base_specifier", "{0,4:x}", vec![Bool(true)], "true"),
        case(
            "char_and_bool_mix",
            "{0}-{1}",
            vec![Char('A'), Bool(false)],
            "A-false",
        ),
    ];

    FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        suite: String::from("bracefmt-core"),
        captured_at: String::from("2025-06-01T00:00:00Z"),
        cases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TestRunner;

    #[test]
    fn test_builtin_suite_passes_end_to_end() {
        let suite = builtin_suite();
        let results = TestRunner::new("builtin").run(&suite);
        let failures: Vec<_> = results.iter().filter(|r| !r.passed).collect();
        assert!(
            failures.is_empty(),
            "unexpected failures: {:?}",
            failures
                .iter()
                .map(|r| (&r.case, &r.expected, &r.rendered))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_builtin_suite_case_names_are_unique() {
        let suite = builtin_suite();
        let mut names: Vec<_> = suite.cases.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), suite.cases.len());
    }

    #[test]
    fn test_builtin_suite_serializes() {
        let suite = builtin_suite();
        let json = suite.to_json().unwrap();
        let back = crate::fixtures::FixtureSet::from_json(&json).unwrap();
        assert_eq!(back.cases.len(), suite.cases.len());
    }
}
