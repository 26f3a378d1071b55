//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let common = expected_lines.len().min(actual_lines.len());
    for i in 0..common {
        if expected_lines[i] != actual_lines[i] {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            out.push_str(&format!("-{}\n", expected_lines[i]));
            out.push_str(&format!("+{}\n", actual_lines[i]));
        }
    }
    for line in &expected_lines[common..] {
        out.push_str(&format!("-{line}\n"));
    }
    for line in &actual_lines[common..] {
        out.push_str(&format!("+{line}\n"));
    }
    out
}
