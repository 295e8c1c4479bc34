//! Long-form article footer.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use vidnote_core::{Document, VideoContext};

/// Bold label that opens the appended metadata section.
pub const METADATA_SENTINEL: &str = "**文章元信息**";

const DISCLAIMER: &str = "*本文由 AI 辅助创作，基于视频内容深度重构而成。*";

// 思想来源 (Source of Inspiration): …
// 原始视频 (Original Video): …
static PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*思想来源[ \t]*(?:[(（][^)）\n]*[)）])?[ \t]*[:：][^\n]*\n[ \t]*原始视频[ \t]*(?:[(（][^)）\n]*[)）])?[ \t]*[:：][^\n]*(?:\n|\z)",
    )
    .expect("Valid preamble regex")
});

// Same pair, bulleted, opening the text
static LEADING_BULLETED_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\s*[-*][ \t]*思想来源[^\n]*\n[ \t]*[-*][ \t]*原始视频[^\n]*(?:\n|\z)")
        .expect("Valid leading metadata regex")
});

static METADATA_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^---[ \t]*\n\s*\*\*文章元信息\*\*.*\z").expect("Valid metadata section regex")
});

static BULLETED_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^[ \t]*[-*][ \t]*思想来源[^\n]*\n[ \t]*[-*][ \t]*原始视频.*\z")
        .expect("Valid bulleted metadata regex")
});

static DISCLAIMER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)(?:^---[ \t]*\n\s*)?^\*本文由\s*AI\s*辅助创作.*\z").expect("Valid disclaimer regex")
});

fn truncate_at(pattern: &Regex, text: &str) -> String {
    match pattern.find(text) {
        Some(m) => text[..m.start()].trim().to_string(),
        None => text.trim().to_string(),
    }
}

fn strip_once(text: &str) -> String {
    let text = PREAMBLE.replace_all(text, "");
    let text = LEADING_BULLETED_PAIR.replace(&text, "");
    let text = truncate_at(&METADATA_SECTION, &text);
    let text = truncate_at(&BULLETED_PAIR, &text);
    truncate_at(&DISCLAIMER_BLOCK, &text)
}

/// Remove every previously inserted metadata preamble, footer and disclaimer.
///
/// The metadata section is cut at its first occurrence. Stripping repeats
/// until nothing changes.
///
/// # Examples
///
/// ```
/// use vidnote_generation::strip_article_metadata;
///
/// let text = "思想来源 (Source of Inspiration): U\n原始视频 (Original Video): http://x\n\n正文。";
/// assert_eq!(strip_article_metadata(text), "正文。");
/// ```
pub fn strip_article_metadata(text: &str) -> String {
    let mut current = text.trim().to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn footer(context: &VideoContext) -> String {
    format!(
        "---\n\n{METADATA_SENTINEL}\n\n\
         - 思想来源 (Source of Inspiration): {}\n\
         - 原始视频 (Original Video): {}\n\
         - 视频平台 (Platform): {}\n\
         - 文章生成时间 (Generated At): {}\n\n\
         ---\n\n{DISCLAIMER}\n",
        context.uploader(),
        context.url(),
        context.platform(),
        context.timestamp(),
    )
}

pub(super) fn assemble(body: &str, context: &VideoContext) -> Document {
    let cleaned = strip_article_metadata(body);
    debug!(
        payload_len = body.chars().count(),
        cleaned_len = cleaned.chars().count(),
        "Assembling article"
    );
    if cleaned.is_empty() {
        Document::new(footer(context))
    } else {
        Document::new(format!("{}\n\n{}", cleaned, footer(context)))
    }
}
