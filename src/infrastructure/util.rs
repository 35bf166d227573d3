// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::SlugifyOptions;
use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile HTML tag regex"));
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("Failed to compile separator regex"));
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("Failed to compile slug charset regex"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("Failed to compile hyphen regex"));

/// Convert `text` into a URL-friendly slug. Empty input yields an empty
/// string; so does input with no ASCII letters or digits.
pub fn slugify(text: &str, options: &SlugifyOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let untagged = HTML_TAG.replace_all(&lowered, "");
    let hyphenated = SEPARATOR_RUN.replace_all(&untagged, "-");
    let filtered = DISALLOWED.replace_all(&hyphenated, "");
    let mut slug = filtered.trim_matches('-').to_string();

    if options.strict {
        slug = DISALLOWED.replace_all(&slug, "").into_owned();
    }

    slug = HYPHEN_RUN.replace_all(&slug, "-").into_owned();

    // ASCII only at this point, so byte length equals char count.
    if options.max_length > 0 && slug.len() > options.max_length {
        slug.truncate(options.max_length);
        let trimmed = slug.trim_end_matches('-').len();
        slug.truncate(trimmed);
    }

    slug
}

/// Regex-driven slug generator used for blog post routes.
#[derive(Default, Clone, Copy)]
pub struct PatternSlugGenerator;

impl SlugGenerator for PatternSlugGenerator {
    fn slugify(&self, input: &str, options: &SlugifyOptions) -> String {
        slugify(input, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::Slug;

    fn slug(text: &str) -> String {
        slugify(text, &SlugifyOptions::default())
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn tags_are_stripped_and_spaces_collapsed() {
        assert_eq!(slug("<b>Spaced   Out</b>"), "spaced-out");
    }

    #[test]
    fn underscores_and_hyphen_runs_collapse() {
        assert_eq!(slug("snake_case -- and__more"), "snake-case-and-more");
        assert_eq!(slug("--edge--"), "edge");
    }

    #[test]
    fn removed_symbols_do_not_leave_double_hyphens() {
        assert_eq!(slug("Profit - & - Loss"), "profit-loss");
        assert_eq!(slug("a-!-b"), "a-b");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(slug("Café Déjà Vu"), "caf-dj-vu");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!!! ???"), "");
        assert_eq!(slug("<p></p>"), "");
    }

    #[test]
    fn truncation_does_not_leave_trailing_hyphen() {
        let options = SlugifyOptions::default().with_max_length(6);
        assert_eq!(slugify("hello world", &options), "hello");
    }

    #[test]
    fn zero_max_length_disables_truncation() {
        let text = "long ".repeat(30);
        let options = SlugifyOptions::default().with_max_length(0);
        assert_eq!(slugify(&text, &options).len(), 30 * 5 - 1);
    }

    #[test]
    fn strict_mode_matches_default() {
        let strict = SlugifyOptions::default().strict(true);
        for text in ["Hello, World!", "<i>QuickBooks</i> 101 — tips", "Año nuevo"] {
            assert_eq!(slugify(text, &strict), slug(text));
        }
    }

    #[test]
    fn output_always_matches_slug_grammar() {
        let samples = [
            "Hello, World!",
            "  leading and trailing  ",
            "___",
            "a",
            "Q1 2024: Cash-Flow <em>Forecasting</em> & Budgeting for Small Businesses in Spokane, WA",
            "emoji 🚀 rocket",
            "tab\tand\nnewline",
            "x-",
            "-x",
            "1099 vs W-2",
            "<<>>",
            "a <b",
        ];
        for max in [0usize, 1, 5, 12, 60] {
            let options = SlugifyOptions::default().with_max_length(max);
            for text in samples {
                let out = slugify(text, &options);
                if out.is_empty() {
                    continue;
                }
                assert!(Slug::new(out.clone()).is_ok(), "{text:?} -> {out:?}");
                if max > 0 {
                    assert!(out.len() <= max, "{out:?} longer than {max}");
                }
            }
        }
    }
}
