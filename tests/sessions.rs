use std::fs;

use vecalc::interpreter::evaluator::core::Context;
use walkdir::WalkDir;

/// Replays every transcript under `tests/sessions`.
///
/// A transcript is a list of `> input` lines, each followed by the lines
/// the calculator should print for it. Assignments print nothing. Lines
/// starting with `#` and blank lines are ignored. Every file runs in its own
/// session.
#[test_log::test]
fn transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut context = Context::new();
        for (input, expected) in parse_transcript(&content) {
            count += 1;
            let actual = match context.evaluate(&input) {
                Ok(Some(value)) => value.to_string(),
                Ok(None) => String::new(),
                Err(e) => e.to_string(),
            };
            assert_eq!(actual, expected, "{path:?}: '{input}'");
        }
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

fn parse_transcript(content: &str) -> Vec<(String, String)> {
    let mut steps: Vec<(String, Vec<&str>)> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(input) = line.strip_prefix("> ") {
            steps.push((input.to_string(), Vec::new()));
        } else if let Some((_, output)) = steps.last_mut() {
            output.push(line);
        } else {
            panic!("Output line before any input: {line}");
        }
    }

    steps.into_iter()
         .map(|(input, output)| (input, output.join("\n")))
         .collect()
}
