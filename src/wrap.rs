//! Greedy word wrap with forced-break markers.
//!
//! Quote text is split on whitespace and packed greedily into lines: a word
//! joins the current line if the joined candidate still measures within the
//! width budget, otherwise the line is closed and the word starts the next
//! one. A literal `||` token is not a word — it forces a line break at that
//! position, whatever the surrounding widths.
//!
//! The budget is `0.8 ×` the caller's maximum width, leaving breathing room
//! around the centered block. A single word wider than the budget is never
//! split; it becomes its own overflowing line.
//!
//! Measurement is a seam: the wrapper takes any `&str -> TextBounds` closure,
//! so tests run with a character-count measure and production passes a loaded
//! [`Face`](crate::typeface::Face).

use crate::typeface::TextBounds;

/// Token that forces a line break inside quote text.
pub const BREAK_MARKER: &str = "||";

/// Fraction of the maximum width a line may actually fill.
pub const FILL_FACTOR: f32 = 0.8;

/// Wrap `text` into lines whose measured width fits `FILL_FACTOR * max_width`.
///
/// Empty input yields no lines. A leading `||` yields one empty line — an
/// explicit blank line is preserved, not collapsed.
pub fn wrap_text<F>(text: &str, measure: F, max_width: u32) -> Vec<String>
where
    F: Fn(&str) -> TextBounds,
{
    let budget = FILL_FACTOR * max_width as f32;
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if word == BREAK_MARKER {
            // Forced break: close the line even if empty, skip measurement
            lines.push(std::mem::take(&mut line));
            continue;
        }
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate).width() as f32 <= budget {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10px per character — wide enough to make budgets easy to reason about.
    fn char_measure(text: &str) -> TextBounds {
        TextBounds {
            left: 0,
            top: 0,
            right: text.chars().count() as i32 * 10,
            bottom: 10,
        }
    }

    /// Budget for `max_width` under the char measure, in characters.
    fn chars_that_fit(max_width: u32) -> usize {
        (FILL_FACTOR * max_width as f32 / 10.0) as usize
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("hello world", char_measure, 1000);
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap_text("", char_measure, 1000).is_empty());
        assert!(wrap_text("   \n\t ", char_measure, 1000).is_empty());
    }

    #[test]
    fn lines_fit_the_budget_or_are_single_overlong_words() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        let max_width = 200; // budget: 16 chars
        let lines = wrap_text(text, char_measure, max_width);
        assert!(lines.len() > 1);
        for line in &lines {
            let fits = char_measure(line).width() as f32 <= FILL_FACTOR * max_width as f32;
            let single_word = !line.contains(' ');
            assert!(fits || single_word, "line {line:?} overflows with multiple words");
        }
        assert!(chars_that_fit(max_width) >= lines[0].chars().count());
    }

    #[test]
    fn rejoining_lines_reconstructs_the_token_sequence() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_text(text, char_measure, 150);
        let rejoined = lines.join(" ");
        let rejoined_tokens: Vec<&str> = rejoined.split_whitespace().collect();
        let original_tokens: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined_tokens, original_tokens);
    }

    #[test]
    fn marker_forces_a_break_even_when_everything_fits() {
        let lines = wrap_text("Stay hungry || stay foolish", char_measure, 10_000);
        assert_eq!(lines, vec!["Stay hungry", "stay foolish"]);
    }

    #[test]
    fn marker_at_start_yields_a_preserved_empty_line() {
        let lines = wrap_text("|| after the break", char_measure, 10_000);
        assert_eq!(lines, vec!["", "after the break"]);
    }

    #[test]
    fn marker_alone_yields_one_empty_line() {
        assert_eq!(wrap_text("||", char_measure, 10_000), vec![""]);
    }

    #[test]
    fn consecutive_markers_yield_consecutive_empty_lines() {
        let lines = wrap_text("a || || b", char_measure, 10_000);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_marker_does_not_add_a_trailing_line() {
        // The accumulator is closed by the marker; nothing follows it
        let lines = wrap_text("keep going ||", char_measure, 10_000);
        assert_eq!(lines, vec!["keep going"]);
    }

    #[test]
    fn overlong_single_word_is_never_split() {
        // budget: 8 chars; the word is 26
        let lines = wrap_text("abcdefghijklmnopqrstuvwxyz", char_measure, 100);
        assert_eq!(lines, vec!["", "abcdefghijklmnopqrstuvwxyz"]);
    }

    #[test]
    fn overlong_word_mid_text_gets_its_own_line() {
        // budget: 16 chars
        let lines = wrap_text("a b supercalifragilisticexpialidocious c", char_measure, 200);
        assert_eq!(
            lines,
            vec!["a b", "supercalifragilisticexpialidocious", "c"]
        );
    }

    #[test]
    fn break_happens_exactly_at_the_budget_boundary() {
        // budget: 8 chars. "aaaa bbb" is exactly 8 → fits; adding "cc" spills
        let lines = wrap_text("aaaa bbb cc", char_measure, 100);
        assert_eq!(lines, vec!["aaaa bbb", "cc"]);
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        let lines = wrap_text("spaced   out\t\ttext", char_measure, 10_000);
        assert_eq!(lines, vec!["spaced out text"]);
    }
}
