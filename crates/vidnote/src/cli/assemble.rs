//! Offline re-assembly of existing documents.

use anyhow::{Context, Result};
use std::path::Path;
use vidnote::{Document, DocumentAssembler, Headlines, NoteAssembly, VideoContext, VidnoteConfig};

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Strip any previous footer from `input` and append a fresh one.
pub fn article(config: &VidnoteConfig, input: &Path, context: &VideoContext) -> Result<Document> {
    let text = read_input(input)?;
    Ok(DocumentAssembler::new(config.layout).assemble_article(&text, context))
}

/// Headline list from a primary title and alternates, blank entries dropped.
pub fn headlines(title: &str, alternates: &[String], placeholder: &str) -> Headlines {
    let candidates = std::iter::once(title)
        .chain(alternates.iter().map(String::as_str))
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .collect();
    Headlines::new(candidates).unwrap_or_else(|| Headlines::placeholder(placeholder))
}

/// Re-lay `input` as a note with the given headlines, tags and images.
pub fn note(
    config: &VidnoteConfig,
    input: &Path,
    title: &str,
    alternates: &[String],
    tags: &[String],
    images: &[String],
) -> Result<Document> {
    let text = read_input(input)?;
    let headlines = headlines(title, alternates, &config.note.placeholder_title);
    let assembly = NoteAssembly {
        headlines: &headlines,
        tags,
        media: images,
    };
    Ok(DocumentAssembler::new(config.layout).assemble_note(&text, &assembly))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn input_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn blank_title_falls_back_to_alternates() {
        let headlines = headlines("  ", &["备选一号标题".to_string()], "小红书笔记");
        assert_eq!(headlines.primary(), "备选一号标题");
        assert!(!headlines.is_placeholder());
    }

    #[test]
    fn no_titles_uses_placeholder() {
        let headlines = headlines("", &[], "小红书笔记");
        assert!(headlines.is_placeholder());
    }

    #[test]
    fn assembling_an_assembled_article_is_stable() {
        let config = VidnoteConfig::default();
        let context = VideoContext::default().with_uploader("U").with_timestamp("2024-01-01");
        let file = input_file("正文。");

        let once = article(&config, file.path(), &context).unwrap();
        let again_file = input_file(once.as_str());
        let twice = article(&config, again_file.path(), &context).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn assembling_note_file() {
        let config = VidnoteConfig::default();
        let file = input_file("第一段。\n\n第二段。");

        let document = note(
            &config,
            file.path(),
            "主标题够长了",
            &[],
            &["标签".to_string()],
            &["c.png".to_string()],
        )
        .unwrap();

        assert_eq!(
            document.as_str(),
            "# 主标题够长了\n\n![封面图](c.png)\n\n第一段。\n\n第二段。\n\n---\n\n#标签\n"
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        let config = VidnoteConfig::default();
        let result = article(&config, Path::new("/nonexistent/vidnote.md"), &VideoContext::default());
        assert!(result.is_err());
    }
}
