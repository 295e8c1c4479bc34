//! Two-phase and combined note generation through a scripted driver.

mod test_utils;

use test_utils::{MockDriver, MockResponse};
use vidnote_config::VidnoteConfig;
use vidnote_core::Headlines;
use vidnote_error::CompletionErrorKind;
use vidnote_generation::{DraftStatus, NoteGenerator};

const CONTENT: &str = "这是一段关于时间管理的视频转录内容。";

const TITLES_REPLY: &str = "1. 三个习惯让你效率翻倍\n2. 时间管理的底层逻辑\n3. 别再假装很忙了";

const BODY_REPLY: &str = "早上先做最难的事。\n\n晚上复盘一天的得失。\n\n#时间管理 #效率";

#[tokio::test]
async fn test_note_runs_title_then_body() -> anyhow::Result<()> {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success(TITLES_REPLY.to_string()),
        MockResponse::Success(BODY_REPLY.to_string()),
    ]);
    let generator = NoteGenerator::new(driver.clone(), &VidnoteConfig::default());

    let draft = generator.generate(CONTENT).await;

    assert_eq!(*draft.status(), DraftStatus::Generated);
    assert_eq!(draft.body(), BODY_REPLY);
    assert_eq!(
        draft.headlines().as_slice(),
        &[
            "三个习惯让你效率翻倍".to_string(),
            "时间管理的底层逻辑".to_string(),
            "别再假装很忙了".to_string(),
        ]
    );
    assert_eq!(draft.tags(), &["时间管理".to_string(), "效率".to_string()]);
    assert_eq!(driver.call_count(), 2);

    let requests = driver.requests();
    let titles_prompt = requests[0]
        .user_instruction()
        .ok_or_else(|| anyhow::anyhow!("missing title prompt"))?;
    assert!(titles_prompt.contains(CONTENT));

    let body_prompt = requests[1]
        .user_instruction()
        .ok_or_else(|| anyhow::anyhow!("missing body prompt"))?;
    assert!(body_prompt.contains("三个习惯让你效率翻倍"));
    assert!(body_prompt.contains(CONTENT));
    Ok(())
}

#[tokio::test]
async fn test_note_phase_sampling() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success(TITLES_REPLY.to_string()),
        MockResponse::Success(BODY_REPLY.to_string()),
    ]);
    let generator = NoteGenerator::new(driver.clone(), &VidnoteConfig::default());

    generator.generate_with_limit(CONTENT, 1200).await;

    let requests = driver.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(*requests[0].temperature(), Some(0.8));
    assert_eq!(*requests[0].max_tokens(), Some(500));
    assert_eq!(*requests[1].temperature(), Some(0.7));
    assert_eq!(*requests[1].max_tokens(), Some(1200));
}

#[tokio::test]
async fn test_note_default_body_cap() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success(TITLES_REPLY.to_string()),
        MockResponse::Success(BODY_REPLY.to_string()),
    ]);
    let config = VidnoteConfig::default();
    let generator = NoteGenerator::new(driver.clone(), &config);

    generator.generate(CONTENT).await;

    assert_eq!(*driver.requests()[1].max_tokens(), Some(config.note.max_tokens));
}

#[tokio::test]
async fn test_title_preview_is_truncated() -> anyhow::Result<()> {
    let long: String = "长".repeat(800);
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success(TITLES_REPLY.to_string()),
        MockResponse::Success(BODY_REPLY.to_string()),
    ]);
    let generator = NoteGenerator::new(driver.clone(), &VidnoteConfig::default());

    generator.generate(&long).await;

    let requests = driver.requests();
    let titles_prompt = requests[0]
        .user_instruction()
        .ok_or_else(|| anyhow::anyhow!("missing title prompt"))?;
    let body_prompt = requests[1]
        .user_instruction()
        .ok_or_else(|| anyhow::anyhow!("missing body prompt"))?;
    assert!(!titles_prompt.contains(&long));
    assert!(titles_prompt.contains(&"长".repeat(500)));
    assert!(body_prompt.contains(&long));
    Ok(())
}

#[tokio::test]
async fn test_title_failure_uses_placeholder() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Error(CompletionErrorKind::Http("connection reset".to_string())),
        MockResponse::Success(BODY_REPLY.to_string()),
    ]);
    let config = VidnoteConfig::default();
    let generator = NoteGenerator::new(driver.clone(), &config);

    let draft = generator.generate(CONTENT).await;

    assert!(draft.headlines().is_placeholder());
    assert_eq!(draft.headlines().primary(), config.note.placeholder_title);
    assert_eq!(draft.body(), BODY_REPLY);
    assert!(draft.is_generated());
    assert_eq!(driver.call_count(), 2);
}

#[tokio::test]
async fn test_both_phases_fail_pass_content_through() {
    let generator = NoteGenerator::new(MockDriver::new_failing(), &VidnoteConfig::default());

    let draft = generator.generate(CONTENT).await;

    assert_eq!(draft.body(), CONTENT);
    assert_eq!(draft.headlines(), &Headlines::placeholder("小红书笔记"));
    assert_eq!(draft.headlines().len(), 1);
    assert!(draft.tags().is_empty());
    assert_eq!(*draft.status(), DraftStatus::Passthrough);
}

#[tokio::test]
async fn test_body_failure_keeps_headlines() {
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success(TITLES_REPLY.to_string()),
        MockResponse::Empty,
    ]);
    let generator = NoteGenerator::new(driver, &VidnoteConfig::default());

    let draft = generator.generate(CONTENT).await;

    assert_eq!(draft.body(), CONTENT);
    assert_eq!(draft.headlines().primary(), "三个习惯让你效率翻倍");
    assert!(draft.tags().is_empty());
    assert!(!draft.is_generated());
}

#[tokio::test]
async fn test_unusable_titles_fall_back_to_placeholder() {
    let reply = format!("1. 好\n2. {}", "超长标题".repeat(15));
    let driver = MockDriver::new_sequence(vec![
        MockResponse::Success(reply),
        MockResponse::Success(BODY_REPLY.to_string()),
    ]);
    let generator = NoteGenerator::new(driver, &VidnoteConfig::default());

    let draft = generator.generate(CONTENT).await;

    assert!(draft.headlines().is_placeholder());
    assert!(draft.is_generated());
}

#[tokio::test]
async fn test_combined_format() {
    let reply = "一. 标题\n1. 三个习惯让你效率翻倍\n2. 时间管理的底层逻辑\n\n二. 正文\n早上先做最难的事。\n\n晚上复盘。\n\n标签：#时间管理 #效率";
    let driver = MockDriver::new_success(reply);
    let generator = NoteGenerator::new(driver.clone(), &VidnoteConfig::default());

    let draft = generator.generate_combined(CONTENT).await;

    assert!(draft.is_generated());
    assert_eq!(draft.headlines().primary(), "三个习惯让你效率翻倍");
    assert_eq!(draft.headlines().len(), 2);
    assert_eq!(draft.body(), "早上先做最难的事。\n\n晚上复盘。");
    assert_eq!(draft.tags(), &["时间管理".to_string(), "效率".to_string()]);
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn test_combined_without_body_section_passes_through() {
    let driver = MockDriver::new_success("一. 标题\n1. 三个习惯让你效率翻倍");
    let generator = NoteGenerator::new(driver, &VidnoteConfig::default());

    let draft = generator.generate_combined(CONTENT).await;

    assert!(!draft.is_generated());
    assert_eq!(draft.body(), CONTENT);
    assert_eq!(draft.headlines().primary(), "三个习惯让你效率翻倍");
}

#[tokio::test]
async fn test_combined_no_output() {
    let generator = NoteGenerator::new(MockDriver::new_failing(), &VidnoteConfig::default());

    let draft = generator.generate_combined(CONTENT).await;

    assert!(!draft.is_generated());
    assert!(draft.headlines().is_placeholder());
    assert!(draft.tags().is_empty());
}
