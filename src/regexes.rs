//! Common pattern fragments used to filter linguistic noise out of provider
//! markup, plus the combinators and stripping passes built on top of them.
//!
//! The fragments are plain pattern strings, composed with [`any`] and [`seq`]
//! and compiled once into the lazy catalogue below. Providers pick the
//! combination that matches their dataset's annotation style.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the special characters -, !, ?, %, &, /, #, $
pub const SPECIAL_CHARACTERS: &str = "[-!?%&/#$]+";

/// Matches parentheses with or without content
pub const PARENTHESIS: &str = r"\([^)]*\)";

/// Matches curly braces with or without content
pub const CURLY_BRACES: &str = r"\{[^}]*\}";

/// Matches square brackets with or without content
pub const SQUARE_BRACKETS: &str = r"\[[^\]]*\]";

/// Matches angle brackets with or without content
pub const ANGLE_BRACKETS: &str = r"<[^>]*>";

/// Matches digit runs
pub const DIGITS: &str = r"\d+";

/// Matches the common English placeholder pronouns sth., sb.
pub const COMMON_PRONOUNS_EN: &str = r"(sth\.|sb\.)";

/// Matches the common German placeholder pronouns jd., etw.
pub const COMMON_PRONOUNS_DE: &str = r"(jd\.|etw\.)";

/// Matches a word starting with a lowercase letter followed by a point,
/// e.g. the "adj." / "ugs." style abbreviation tags.
pub const WORDS_WITH_POINT: &str = r"\s*\b[a-z][a-zA-Z]*\.";

/// Matches the infinitive marker "to " at the beginning of a term
pub const INFINITIVE_TO: &str = r"^\s*to\s+";

/// Matches whitespace runs
pub const WHITESPACE: &str = r"\s+";

/// Combines all fragments as alternatives with `(...|...|...)`.
pub fn any(fragments: &[&str]) -> String {
    if fragments.is_empty() {
        return String::new();
    }
    format!("({})", fragments.join("|"))
}

/// Combines all fragments to match sequentially via simple concatenation.
pub fn seq(fragments: &[&str]) -> String {
    fragments.concat()
}

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(WHITESPACE).unwrap());

/// Deletes all matches of `garbage` until a full application leaves the input
/// unchanged. Annotations can be nested or adjacent (a bracketed aside right
/// after a parenthesised one), so a single pass under-strips such inputs; the
/// fixed point is where no more garbage can be removed.
pub fn strip_to_fixed_point(garbage: &Regex, input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let stripped = garbage.replace_all(&current, "").into_owned();
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}

/// Collapses whitespace runs to a single space and trims the ends.
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RE.replace_all(input, " ").trim().to_string()
}

/// Fixed-point strip followed by whitespace normalization. This is the shape
/// of every provider's cleanup pass.
pub fn strip_garbage(garbage: &Regex, input: &str) -> String {
    collapse_whitespace(&strip_to_fixed_point(garbage, input))
}

/// Removes annotation words (grammar, register and region tags), but only
/// where they occur as standalone whitespace-delimited tokens. A tag that
/// happens to be a substring of a real word is left alone.
pub fn strip_standalone_words(input: &str, words: &[&str]) -> String {
    let kept: Vec<&str> = input
        .split_whitespace()
        .filter(|token| !words.contains(token))
        .collect();
    kept.join(" ")
}

/// Removes a single leading article ("der Hund" -> "Hund"). Occurrences of
/// the article anywhere else in the term are kept.
pub fn strip_leading_article(input: &str, articles: &[&str]) -> String {
    for article in articles {
        if let Some(rest) = input.strip_prefix(&format!("{article} ")) {
            return rest.trim_start().to_string();
        }
    }
    input.to_string()
}

/// Drops every character outside the ASCII range that is not a German
/// diacritic letter. Some providers interleave transliterations in other
/// scripts into their result cells.
pub fn strip_foreign_script(input: &str) -> String {
    const GERMAN_LETTERS: &str = "\u{e4}\u{f6}\u{fc}\u{c4}\u{d6}\u{dc}\u{df}"; // äöüÄÖÜß
    input
        .chars()
        .filter(|c| c.is_ascii() || GERMAN_LETTERS.contains(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete_all(pattern: &str, input: &str) -> String {
        Regex::new(pattern).unwrap().replace_all(input, "").into_owned()
    }

    #[test]
    fn any_matches_one_alternative() {
        let regex = any(&[INFINITIVE_TO]);
        assert_eq!(delete_all(&regex, "to stay"), "stay");
    }

    #[test]
    fn any_matches_all_alternatives() {
        let regex = any(&[INFINITIVE_TO, PARENTHESIS]);
        assert_eq!(delete_all(&regex, "to stay(Trefferanzeige am Schie\u{df}stand)"), "stay");
    }

    #[test]
    fn any_of_nothing_matches_nothing() {
        assert_eq!(any(&[]), "");
    }

    #[test]
    fn seq_matches_sequentially() {
        let regex = seq(&[INFINITIVE_TO, PARENTHESIS]);
        assert_eq!(delete_all(&regex, "to (Trefferanzeige am Schie\u{df}stand)stay"), "stay");
    }

    #[test]
    fn square_brackets_are_deleted_with_content() {
        assert_eq!(delete_all(SQUARE_BRACKETS, "[annotation] wand"), " wand");
    }

    #[test]
    fn all_bracket_kinds_are_deleted() {
        let regex = any(&[ANGLE_BRACKETS, CURLY_BRACES, SQUARE_BRACKETS, PARENTHESIS]);
        assert_eq!(delete_all(&regex, "<bla> Wand [haus] (wand) {blub}"), " Wand   ");
        assert_eq!(delete_all(&regex, "<bla>Wand[haus](wand){blub}"), "Wand");
    }

    #[test]
    fn words_with_point_keeps_sentence_end() {
        // A capitalized word followed by a point is prose, not an annotation tag.
        assert_eq!(delete_all(WORDS_WITH_POINT, "Because."), "Because.");
    }

    #[test]
    fn words_with_multiple_points_are_matched() {
        assert_eq!(delete_all(WORDS_WITH_POINT, "to wand sb.sth."), "to wand");
    }

    #[test]
    fn fixed_point_strips_nested_annotations() {
        let garbage = Regex::new(&any(&[INFINITIVE_TO, PARENTHESIS, SQUARE_BRACKETS])).unwrap();
        assert_eq!(strip_garbage(&garbage, "to stay(Notes [inner])"), "stay");
    }

    #[test]
    fn fixed_point_strips_newly_exposed_garbage() {
        // The infinitive marker is anchored to the start, so it only becomes
        // visible once the digit run in front of it has been deleted. A single
        // pass stops at "to go".
        let garbage = Regex::new(&any(&[INFINITIVE_TO, DIGITS, PARENTHESIS])).unwrap();
        assert_eq!(strip_garbage(&garbage, "12to go(away)"), "go");
        assert_eq!(strip_garbage(&garbage, "to to stay"), "stay");
    }

    #[test]
    fn fixed_point_strips_adjacent_annotations() {
        let garbage = Regex::new(&any(&[SQUARE_BRACKETS, PARENTHESIS])).unwrap();
        assert_eq!(strip_garbage(&garbage, "wall (fig.)[arch.] chart"), "wall chart");
    }

    #[test]
    fn strip_garbage_is_idempotent() {
        let garbage = Regex::new(&any(&[
            DIGITS,
            PARENTHESIS,
            SQUARE_BRACKETS,
            CURLY_BRACES,
            ANGLE_BRACKETS,
            SPECIAL_CHARACTERS,
            WORDS_WITH_POINT,
        ]))
        .unwrap();
        for input in [
            "to stay(Notes [inner])",
            "  wall   {f} <arch> 42 chart!",
            "plain term",
            "",
            "sb. owes sth. to sb.",
        ] {
            let once = strip_garbage(&garbage, input);
            let twice = strip_garbage(&garbage, &once);
            assert_eq!(once, twice, "normalization not idempotent for {input:?}");
        }
    }

    #[test]
    fn standalone_words_are_removed_whole_token_only() {
        let words = ["fig", "pej"];
        assert_eq!(strip_standalone_words("fig tree fig", &words), "tree");
        // "fig" inside a longer word must survive
        assert_eq!(strip_standalone_words("figment of imagination", &words), "figment of imagination");
    }

    #[test]
    fn leading_article_is_stripped_once() {
        let articles = ["der", "die", "das", "the"];
        assert_eq!(strip_leading_article("die Wand", &articles), "Wand");
        assert_eq!(strip_leading_article("the way of the world", &articles), "way of the world");
        // not a leading article, just a prefix of a word
        assert_eq!(strip_leading_article("derby", &articles), "derby");
    }

    #[test]
    fn foreign_script_is_filtered() {
        assert_eq!(strip_foreign_script("Stra\u{df}e \u{43f}\u{440}"), "Stra\u{df}e ");
        assert_eq!(strip_foreign_script("\u{e4}\u{f6}\u{fc} ok"), "\u{e4}\u{f6}\u{fc} ok");
    }
}
