//! Scrollbar rule extraction
//!
//! Scrollbar customizations are pulled out of the theme text before it is
//! compiled so they can be switched on and off independently of the theme.
//! This is a textual pass: nested or unbalanced braces are not understood and
//! simply produce odd splits rather than errors.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("valid comment pattern"));

static SCROLLBAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^}|,]*::-webkit-scrollbar[\s\S]*?\{[\s\S]*?\}").expect("valid scrollbar pattern")
});

/// Theme text split into its base content and scrollbar rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// Comment-free content with the scrollbar rules removed
    pub content: String,
    /// Scrollbar rules in order of appearance
    pub scrollbar: Vec<String>,
}

/// Strip comments, then move every `::-webkit-scrollbar` rule block out of
/// `raw` into the scrollbar list.
pub fn extract_scrollbars(raw: &str) -> Extracted {
    let stripped = COMMENT_RE.replace_all(raw, "");

    let mut scrollbar = Vec::new();
    let content = SCROLLBAR_RE
        .replace_all(&stripped, |caps: &Captures<'_>| {
            // The selector prefix swallows whitespace left over from the
            // previous rule.
            scrollbar.push(caps[0].trim().to_string());
            ""
        })
        .into_owned();

    Extracted { content, scrollbar }
}
