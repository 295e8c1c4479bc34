//! Character-safe text helpers.

/// Truncate to at most `max` characters, appending `suffix` when cut.
///
/// Counts characters, not bytes, so CJK text is never split mid-codepoint.
///
/// # Examples
///
/// ```
/// use vidnote_generation::truncate_chars;
///
/// assert_eq!(truncate_chars("视频内容很长", 4, "..."), "视频内容...");
/// assert_eq!(truncate_chars("short", 10, "..."), "short");
/// ```
pub fn truncate_chars(text: &str, max: usize, suffix: &str) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}{}", &text[..cut], suffix),
        None => text.to_string(),
    }
}

/// Short single-line preview for log fields.
pub(crate) fn preview(text: &str) -> String {
    truncate_chars(text.trim(), 30, "...").replace('\n', " ")
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn tail_chars(text: &str, n: usize) -> &str {
    let len = char_len(text);
    if len <= n {
        return text;
    }
    match text.char_indices().nth(len - n) {
        Some((start, _)) => &text[start..],
        None => text,
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '。' | '！' | '？' | '.' | '!' | '?')
}

/// Sentences including their terminator; a trailing fragment is kept.
fn sentences(paragraph: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in paragraph.char_indices() {
        if is_sentence_end(c) {
            let end = i + c.len_utf8();
            out.push(&paragraph[start..end]);
            start = end;
        }
    }
    if start < paragraph.len() {
        out.push(&paragraph[start..]);
    }
    out
}

/// Split a paragraph longer than `max_chars` at sentence boundaries.
///
/// Consecutive chunks share one sentence when `overlap_chars > 0`.
fn split_paragraph(paragraph: &str, max_chars: usize, overlap_chars: usize, chunks: &mut Vec<String>) {
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for sentence in sentences(paragraph) {
        let sentence_len = char_len(sentence);
        if current_len + sentence_len > max_chars && !current.is_empty() {
            chunks.push(current.concat());
            match current.last().copied() {
                Some(last) if overlap_chars > 0 => {
                    current_len = char_len(last) + sentence_len;
                    current = vec![last, sentence];
                }
                _ => {
                    current = vec![sentence];
                    current_len = sentence_len;
                }
            }
        } else {
            current.push(sentence);
            current_len += sentence_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current.concat());
    }
}

/// Split text into chunks of at most roughly `max_chars` characters.
///
/// Paragraphs (separated by blank lines) are packed greedily. When a chunk is
/// closed, the tail of its last paragraph (at most `overlap_chars` characters)
/// opens the next one. A single paragraph longer than `max_chars` is split at
/// sentence terminators instead. Blank input yields no chunks.
///
/// # Examples
///
/// ```
/// use vidnote_generation::split_content;
///
/// let text = "第一段。\n\n第二段。\n\n第三段。";
/// assert_eq!(split_content(text, 2000, 200), vec![text.to_string()]);
/// assert!(split_content("   ", 2000, 200).is_empty());
/// ```
pub fn split_content(text: &str, max_chars: usize, overlap_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for paragraph in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
        let paragraph_len = char_len(paragraph);

        if paragraph_len > max_chars {
            if !current.is_empty() {
                chunks.push(current.join("\n\n"));
                current.clear();
                current_len = 0;
            }
            split_paragraph(paragraph, max_chars, overlap_chars, &mut chunks);
            continue;
        }

        if current_len + paragraph_len > max_chars && !current.is_empty() {
            chunks.push(current.join("\n\n"));
            match current.last().copied() {
                Some(last) if overlap_chars > 0 => {
                    let overlap = tail_chars(last, overlap_chars);
                    current_len = char_len(overlap) + paragraph_len;
                    current = vec![overlap, paragraph];
                }
                _ => {
                    current = vec![paragraph];
                    current_len = paragraph_len;
                }
            }
        } else {
            current.push(paragraph);
            current_len += paragraph_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join("\n\n"));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_chars("标题标题标题", 2, ""), "标题");
        assert_eq!(truncate_chars("abc", 3, "..."), "abc");
        assert_eq!(truncate_chars("", 0, "..."), "");
    }

    #[test]
    fn preview_is_single_line() {
        let text = format!("line one\nline two {}", "x".repeat(40));
        let p = preview(&text);
        assert!(!p.contains('\n'));
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 33);
    }

    #[test]
    fn tail_chars_keeps_suffix() {
        assert_eq!(tail_chars("一二三四五", 2), "四五");
        assert_eq!(tail_chars("ab", 5), "ab");
    }

    #[test]
    fn sentences_keep_terminators() {
        assert_eq!(sentences("你好。再见！尾巴"), vec!["你好。", "再见！", "尾巴"]);
        assert_eq!(sentences("One. Two?"), vec!["One.", " Two?"]);
    }

    #[test]
    fn paragraphs_pack_with_tail_overlap() {
        let a = "a".repeat(8);
        let b = "b".repeat(8);
        let c = "c".repeat(8);
        let text = format!("{a}\n\n{b}\n\n{c}");

        let chunks = split_content(&text, 16, 3);
        assert_eq!(chunks, vec![format!("{a}\n\n{b}"), format!("bbb\n\n{c}")]);
    }

    #[test]
    fn no_overlap_when_disabled() {
        let text = format!("{}\n\n{}", "a".repeat(8), "b".repeat(8));
        let chunks = split_content(&text, 10, 0);
        assert_eq!(chunks, vec!["a".repeat(8), "b".repeat(8)]);
    }

    #[test]
    fn oversized_paragraph_splits_on_sentences_with_overlap() {
        let paragraph = "一二三四。五六七八。九十一二。";
        let chunks = split_content(paragraph, 10, 2);
        assert_eq!(
            chunks,
            vec![
                "一二三四。五六七八。".to_string(),
                "五六七八。九十一二。".to_string()
            ]
        );
    }

    #[test]
    fn oversized_paragraph_flushes_pending_chunk() {
        let text = format!("短段落。\n\n{}", "长句子很长。".repeat(3));
        let chunks = split_content(&text, 10, 0);
        assert_eq!(chunks[0], "短段落。");
        assert_eq!(chunks.len(), 4);
    }
}
