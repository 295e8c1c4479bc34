//! Assembly is idempotent: re-assembling an assembled document changes nothing.

use vidnote_config::NoteLayout;
use vidnote_core::{Headlines, VideoContext};
use vidnote_generation::{DocumentAssembler, METADATA_SENTINEL, NoteAssembly};

fn context() -> VideoContext {
    VideoContext::default()
        .with_title("T")
        .with_uploader("U")
        .with_url("http://x")
        .with_platform("P")
        .with_timestamp("2024-01-01")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_article_assembly_is_idempotent() {
    let assembler = DocumentAssembler::default();
    let ctx = context();

    let once = assembler.assemble_article("第一段。\n\n第二段。", &ctx);
    let twice = assembler.assemble_article(once.as_str(), &ctx);
    let thrice = assembler.assemble_article(twice.as_str(), &ctx);

    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
    assert_eq!(once.as_str().matches(METADATA_SENTINEL).count(), 1);
    assert_eq!(once.as_str().matches("思想来源").count(), 1);
}

#[test]
fn test_article_reassembly_replaces_old_context() {
    let assembler = DocumentAssembler::default();
    let once = assembler.assemble_article("正文。", &context());
    let updated = context().with_uploader("V").with_timestamp("2025-02-02");

    let again = assembler.assemble_article(once.as_str(), &updated);

    assert!(again.as_str().contains("(Source of Inspiration): V\n"));
    assert!(again.as_str().contains("(Generated At): 2025-02-02\n"));
    assert!(!again.as_str().contains("2024-01-01"));
    assert_eq!(again.as_str().matches(METADATA_SENTINEL).count(), 1);
}

#[test]
fn test_article_with_model_preamble() {
    let body = "思想来源 (Source of Inspiration): U\n原始视频 (Original Video): http://x\n\n# 标题\n\n正文。";
    let document = DocumentAssembler::default().assemble_article(body, &context());

    assert!(document.as_str().starts_with("# 标题\n\n正文。\n\n---"));
    assert_eq!(document.as_str().matches("思想来源").count(), 1);
}

#[test]
fn test_empty_article_is_footer_only() {
    let document = DocumentAssembler::default().assemble_article("  \n", &context());
    assert!(document.as_str().starts_with("---\n\n**文章元信息**"));
}

#[test]
fn test_note_assembly_is_idempotent() {
    let assembler = DocumentAssembler::default();
    let headlines = Headlines::new(strings(&["三个习惯让你效率翻倍", "时间管理的底层逻辑"]))
        .expect("non-empty headlines");
    let tags = strings(&["时间管理", "#效率"]);
    let media = strings(&["cover.png", "a.png", "b.png"]);
    let note = NoteAssembly {
        headlines: &headlines,
        tags: &tags,
        media: &media,
    };

    let once = assembler.assemble_note("第一段。\n\n第二段。\n\n第三段。\n\n第四段。", &note);
    let twice = assembler.assemble_note(once.as_str(), &note);

    assert_eq!(once, twice);
    let text = once.as_str();
    assert_eq!(text.matches("# 备选标题").count(), 1);
    assert_eq!(text.matches("# 三个习惯让你效率翻倍").count(), 1);
    assert_eq!(text.matches("![封面图](cover.png)").count(), 1);
    assert_eq!(text.matches("#效率").count(), 1);
    assert_eq!(text.matches("\n---\n").count(), 2);
}

#[test]
fn test_note_layout_places_figures_around_split() {
    let headlines = Headlines::placeholder("小红书笔记");
    let media = strings(&["c.png", "m.png", "e.png"]);
    let note = NoteAssembly {
        headlines: &headlines,
        tags: &[],
        media: &media,
    };

    let document = DocumentAssembler::default().assemble_note("一。\n\n二。\n\n三。\n\n四。", &note);

    assert_eq!(
        document.as_str(),
        "# 小红书笔记\n\n![封面图](c.png)\n\n一。\n\n二。\n\n![配图](m.png)\n\n三。\n\n四。\n\n![配图](e.png)\n"
    );
}

#[test]
fn test_note_layout_respects_max_images() {
    let headlines = Headlines::placeholder("小红书笔记");
    let media = strings(&["c.png", "m.png", "e.png"]);
    let note = NoteAssembly {
        headlines: &headlines,
        tags: &[],
        media: &media,
    };
    let assembler = DocumentAssembler::new(NoteLayout {
        max_images: 1,
        ..NoteLayout::default()
    });

    let document = assembler.assemble_note("一。\n\n二。", &note);

    assert!(document.as_str().contains("![封面图](c.png)"));
    assert!(!document.as_str().contains("![配图]"));
}

#[test]
fn test_note_reassembly_with_parenthesised_media_targets() {
    let headlines = Headlines::placeholder("小红书笔记");
    let media = strings(&["https://img.example/a(1).png", "b (2).png"]);
    let note = NoteAssembly {
        headlines: &headlines,
        tags: &[],
        media: &media,
    };
    let assembler = DocumentAssembler::default();

    let once = assembler.assemble_note("第一段。\n\n第二段。", &note);
    let twice = assembler.assemble_note(once.as_str(), &note);

    assert_eq!(once, twice);
    assert_eq!(
        twice
            .as_str()
            .matches("![封面图](https://img.example/a(1).png)")
            .count(),
        1
    );
    assert_eq!(twice.as_str().matches("![配图](b (2).png)").count(), 1);
}
