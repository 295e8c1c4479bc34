//! Short-form note layout.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use vidnote_config::NoteLayout;
use vidnote_core::{Document, Headlines};

const ALTERNATES_HEADING: &str = "# 备选标题";
const COVER_LABEL: &str = "封面图";
const FIGURE_LABEL: &str = "配图";

/// Media slots in a note: cover, inline figure, trailing figure.
const MEDIA_SLOTS: usize = 3;

static ALTERNATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)\A\s*#[ \t]*备选标题[^\n]*\n.*?^---[ \t]*$").expect("Valid alternates regex")
});

static LEADING_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A#[ \t]+[^\n]*(?:\n|\z)").expect("Valid heading regex"));

static MEDIA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*!\[(?:封面图|配图)\]\(.*\)[ \t]*$").expect("Valid media line regex")
});

static TAG_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^---[ \t]*\n\s*#[^\s#].*\z").expect("Valid tag block regex")
});

static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:#[^\s#]+\s*)+$").expect("Valid tag line regex"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("Valid paragraph break regex"));

/// Headlines, tags and media for one note.
#[derive(Debug, Clone, Copy)]
pub struct NoteAssembly<'a> {
    /// Primary headline first; more than one adds an alternates preamble
    pub headlines: &'a Headlines,
    /// Tags without the leading `#`
    pub tags: &'a [String],
    /// Media targets: cover, inline figure, trailing figure
    pub media: &'a [String],
}

fn drop_trailing_tag_lines(text: &str) -> &str {
    let mut end = text.trim_end();
    loop {
        let (rest, last) = match end.rfind('\n') {
            Some(i) => (&end[..i], &end[i + 1..]),
            None => ("", end),
        };
        let last = last.trim();
        if last.is_empty() || last == "---" || TAG_LINE.is_match(last) {
            end = rest.trim_end();
            if end.is_empty() {
                return end;
            }
        } else {
            return end;
        }
    }
}

/// Remove headings, media lines and tag blocks a previous assembly added,
/// returning the body as trimmed paragraphs.
///
/// # Examples
///
/// ```
/// use vidnote_generation::strip_note_decorations;
///
/// let text = "# 标题\n\n第一段。\n\n![配图](a.png)\n\n第二段。\n\n#标签1\n#标签2";
/// assert_eq!(strip_note_decorations(text), vec!["第一段。", "第二段。"]);
/// ```
pub fn strip_note_decorations(text: &str) -> Vec<String> {
    let text = ALTERNATES.replace(text.trim(), "");
    let text = LEADING_HEADING.replace(text.trim_start(), "");
    let text = MEDIA_LINE.replace_all(&text, "");
    let text = match TAG_BLOCK.find(&text) {
        Some(m) => &text[..m.start()],
        None => &text[..],
    };
    let text = drop_trailing_tag_lines(text);

    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

fn media_ref(label: &str, target: &str) -> String {
    format!("![{}]({})", label, target)
}

pub(super) fn assemble(body: &str, note: &NoteAssembly<'_>, layout: &NoteLayout) -> Document {
    let paragraphs = strip_note_decorations(body);
    let media: Vec<&str> = note
        .media
        .iter()
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .take(layout.max_images.min(MEDIA_SLOTS))
        .collect();
    let tags: Vec<&str> = note
        .tags
        .iter()
        .map(|t| t.trim().trim_start_matches('#'))
        .filter(|t| !t.is_empty())
        .collect();

    debug!(
        paragraphs = paragraphs.len(),
        candidates = note.headlines.len(),
        media = media.len(),
        tags = tags.len(),
        "Assembling note"
    );

    let mut blocks: Vec<String> = Vec::new();

    if note.headlines.len() > 1 {
        blocks.push(ALTERNATES_HEADING.to_string());
        blocks.push(
            note.headlines
                .iter()
                .enumerate()
                .map(|(i, headline)| format!("{}. {}", i + 1, headline))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        blocks.push("---".to_string());
    }

    blocks.push(format!("# {}", note.headlines.primary()));

    if let Some(cover) = media.first() {
        blocks.push(media_ref(COVER_LABEL, cover));
    }

    let split = layout.split_index(paragraphs.len());
    let (first_half, second_half) = paragraphs.split_at(split);
    blocks.extend(first_half.iter().cloned());
    if let Some(figure) = media.get(1) {
        blocks.push(media_ref(FIGURE_LABEL, figure));
    }
    blocks.extend(second_half.iter().cloned());
    if let Some(figure) = media.get(2) {
        blocks.push(media_ref(FIGURE_LABEL, figure));
    }

    let mut document = blocks.join("\n\n");
    if !tags.is_empty() {
        let tag_lines: Vec<String> = tags.iter().map(|tag| format!("#{}", tag)).collect();
        document.push_str("\n\n---\n\n");
        document.push_str(&tag_lines.join("\n"));
    }
    document.push('\n');

    Document::new(document)
}
