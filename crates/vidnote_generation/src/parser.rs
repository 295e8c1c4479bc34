//! Extraction of headlines, tags and sections from free-form model text.
//!
//! Headline lines go through an explicit pipeline: classify the leading
//! marker, strip numbered, bracket and bullet markers in that order, then
//! check the length window from [`HeadlineRules`].

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};
use vidnote_config::HeadlineRules;
use vidnote_core::Extraction;

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.、)\]）]\s*").expect("Valid numbered marker regex"));

static BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[\[【]\s*(?:标题|headline|title)\s*\d*\s*[\]】]|(?:标题|headline|title)\s*\d+)\s*[:：]?\s*",
    )
    .expect("Valid bracket marker regex")
});

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s*").expect("Valid bullet marker regex"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([^\s#]+)").expect("Valid tag regex"));

static HEADLINE_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)一\s*[.、．]\s*标题(.*?)二\s*[.、．]\s*正文").expect("Valid headline section regex")
});

static BODY_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)二\s*[.、．]\s*正文(.*?)(?:标签\s*[:：]|\z)").expect("Valid body section regex")
});

/// The leading marker found on a candidate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LineMarker {
    /// `1.`, `2)`, `3、`
    Numbered,
    /// `[标题1]`, `[Headline 2]`, `标题3：`
    Bracket,
    /// `-`, `*`
    Bullet,
    /// No marker
    Plain,
}

/// Classify a line by the first marker that applies, in priority order.
///
/// # Examples
///
/// ```
/// use vidnote_generation::{LineMarker, classify_line};
///
/// assert_eq!(classify_line("1. 标题"), LineMarker::Numbered);
/// assert_eq!(classify_line("[标题2] 好标题"), LineMarker::Bracket);
/// assert_eq!(classify_line("- 好标题"), LineMarker::Bullet);
/// assert_eq!(classify_line("好标题"), LineMarker::Plain);
/// ```
pub fn classify_line(line: &str) -> LineMarker {
    let line = line.trim();
    if NUMBERED.is_match(line) {
        LineMarker::Numbered
    } else if BRACKET.is_match(line) {
        LineMarker::Bracket
    } else if BULLET.is_match(line) {
        LineMarker::Bullet
    } else {
        LineMarker::Plain
    }
}

fn strip<'a>(pattern: &Regex, line: &'a str) -> &'a str {
    match pattern.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Remove a leading ordinal marker (`1.`, `2)`, `3、`).
pub fn strip_numbered(line: &str) -> &str {
    strip(&NUMBERED, line)
}

/// Remove a leading bracketed headline label (`[标题1]`, case-insensitive).
pub fn strip_bracket(line: &str) -> &str {
    strip(&BRACKET, line)
}

/// Remove a leading bullet glyph.
pub fn strip_bullet(line: &str) -> &str {
    strip(&BULLET, line)
}

/// Run every stripping stage in priority order and trim the result.
///
/// # Examples
///
/// ```
/// use vidnote_generation::strip_markers;
///
/// assert_eq!(strip_markers("  1. [标题1] 亲测有效的早起方法"), "亲测有效的早起方法");
/// ```
pub fn strip_markers(line: &str) -> &str {
    let line = strip_numbered(line.trim());
    let line = strip_bracket(line);
    strip_bullet(line).trim()
}

fn accept_lines<'a>(
    lines: impl Iterator<Item = &'a str>,
    rules: &HeadlineRules,
    skip: impl Fn(&str) -> bool,
) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !skip(line))
        .map(strip_markers)
        .filter(|line| rules.accepts(line))
        .take(rules.max_candidates)
        .map(str::to_string)
        .collect()
}

/// Headline candidates, one per line, in reply order.
///
/// Lines outside the length window are dropped; at most
/// `rules.max_candidates` are kept.
pub fn parse_headlines(text: &str, rules: &HeadlineRules) -> Extraction<String> {
    let candidates = accept_lines(text.lines(), rules, |_| false);
    debug!(candidates = candidates.len(), "Parsed headline candidates");
    Extraction::from_vec(candidates)
}

/// Headline candidates from the "一. 标题 … 二. 正文" section of a combined reply.
///
/// Without such a section (or with an empty one) the first
/// `rules.fallback_scan_lines` lines are scanned instead, skipping hash-tag
/// lines and section labels.
pub fn parse_headline_section(text: &str, rules: &HeadlineRules) -> Extraction<String> {
    if let Some(section) = HEADLINE_SECTION.captures(text).and_then(|caps| caps.get(1)) {
        let candidates = accept_lines(section.as_str().lines(), rules, |line| {
            line.starts_with('#')
        });
        if !candidates.is_empty() {
            debug!(candidates = candidates.len(), "Parsed headline section");
            return Extraction::Found(candidates);
        }
    }

    warn!("Headline section not found; scanning leading lines");
    let candidates = accept_lines(
        text.lines().take(rules.fallback_scan_lines),
        rules,
        |line| line.starts_with('#') || line.contains("正文") || line.contains("标题"),
    );
    Extraction::from_vec(candidates)
}

/// Every `#tag` token, in first-seen order, duplicates kept.
///
/// # Examples
///
/// ```
/// use vidnote_generation::parse_tags;
///
/// assert_eq!(parse_tags("a #topic b #topic #other"), vec!["topic", "topic", "other"]);
/// assert!(parse_tags("# Heading").is_empty());
/// ```
pub fn parse_tags(text: &str) -> Vec<String> {
    let tags: Vec<String> = TAG
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    if tags.is_empty() {
        warn!("No tags found");
    }
    tags
}

/// Body text of a combined reply: after "二. 正文", before "标签：" or the end.
pub fn parse_combined_body(text: &str) -> Option<String> {
    let body = BODY_SECTION.captures(text)?.get(1)?.as_str();
    let body = body
        .trim_start_matches(|c: char| c == '*' || c == ':' || c == '：' || c.is_whitespace())
        .trim_end();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}
