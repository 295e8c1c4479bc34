//! Short-form note generation.
//!
//! The two-phase protocol is an explicit state machine:
//!
//! ```text
//! Init -> TitlesRequested -> TitlesParsed -> BodyRequested -> Done
//!   \__________\___________________\______________\_______-> Failed
//! ```
//!
//! `Done` and `Failed` are absorbing. A reply without usable headlines still
//! advances (with a placeholder); a body phase without output ends in
//! `Failed`, carrying the original content as a passthrough draft.

use crate::completion::{Sampling, complete};
use crate::parser::{parse_combined_body, parse_headline_section, parse_headlines, parse_tags};
use crate::prompt::{PromptBuilder, PromptProfile};
use derive_getters::Getters;
use strum::{Display, EnumIter};
use tracing::{info, instrument, warn};
use vidnote_config::{HeadlineRules, VidnoteConfig};
use vidnote_core::{CompletionOutcome, Headlines};
use vidnote_interface::CompletionDriver;

/// Where a note generation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum NotePhase {
    /// Nothing sent yet
    Init,
    /// Headline request in flight
    TitlesRequested,
    /// Headlines parsed (possibly a placeholder)
    TitlesParsed,
    /// Body request in flight
    BodyRequested,
    /// Body generated
    Done,
    /// Gave up; the draft is a passthrough
    Failed,
}

/// How a [`NoteDraft`] body came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DraftStatus {
    /// Body written by the completion service
    Generated,
    /// Completion failed; body is the unmodified input
    Passthrough,
}

/// Result of a note generation: body, every headline candidate, tags.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NoteDraft {
    body: String,
    headlines: Headlines,
    tags: Vec<String>,
    status: DraftStatus,
}

impl NoteDraft {
    /// Draft from a generated body; tags are taken from the body.
    pub fn generated(body: impl Into<String>, headlines: Headlines) -> Self {
        let body = body.into();
        let tags = parse_tags(&body);
        Self {
            body,
            headlines,
            tags,
            status: DraftStatus::Generated,
        }
    }

    /// Draft that hands the input back unchanged, with no tags.
    pub fn passthrough(content: impl Into<String>, headlines: Headlines) -> Self {
        Self {
            body: content.into(),
            headlines,
            tags: Vec::new(),
            status: DraftStatus::Passthrough,
        }
    }

    /// Whether the body came from the completion service.
    pub fn is_generated(&self) -> bool {
        self.status == DraftStatus::Generated
    }
}

/// State plus the data each state carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteState {
    /// Nothing sent yet
    Init,
    /// Headline request in flight
    TitlesRequested,
    /// Headlines available
    TitlesParsed {
        /// Parsed or placeholder headlines
        headlines: Headlines,
    },
    /// Body request in flight
    BodyRequested {
        /// Headlines from phase 1
        headlines: Headlines,
    },
    /// Finished with a generated body
    Done(NoteDraft),
    /// Finished with a passthrough draft
    Failed(NoteDraft),
}

impl NoteState {
    /// The phase this state represents.
    pub fn phase(&self) -> NotePhase {
        match self {
            NoteState::Init => NotePhase::Init,
            NoteState::TitlesRequested => NotePhase::TitlesRequested,
            NoteState::TitlesParsed { .. } => NotePhase::TitlesParsed,
            NoteState::BodyRequested { .. } => NotePhase::BodyRequested,
            NoteState::Done(_) => NotePhase::Done,
            NoteState::Failed(_) => NotePhase::Failed,
        }
    }

    /// Headlines known so far.
    pub fn headlines(&self) -> Option<&Headlines> {
        match self {
            NoteState::TitlesParsed { headlines } | NoteState::BodyRequested { headlines } => {
                Some(headlines)
            }
            NoteState::Done(draft) | NoteState::Failed(draft) => Some(draft.headlines()),
            NoteState::Init | NoteState::TitlesRequested => None,
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NoteState::Done(_) | NoteState::Failed(_))
    }
}

/// Inputs that drive a [`NoteMachine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    /// Headline request sent
    TitlesSent,
    /// Headline reply (or its absence)
    TitlesReceived(CompletionOutcome),
    /// Body request sent
    BodySent,
    /// Body reply (or its absence)
    BodyReceived(CompletionOutcome),
    /// Unrecoverable problem in any phase
    Abort {
        /// What went wrong
        reason: String,
    },
}

/// Guarded transitions for one note generation.
///
/// Events that do not fit the current state are ignored and logged.
///
/// # Examples
///
/// ```
/// use vidnote_config::HeadlineRules;
/// use vidnote_core::CompletionOutcome;
/// use vidnote_generation::{NoteEvent, NoteMachine, NotePhase};
///
/// let mut machine = NoteMachine::new("原文", HeadlineRules::default(), "小红书笔记");
/// machine.advance(NoteEvent::TitlesSent);
/// machine.advance(NoteEvent::TitlesReceived(CompletionOutcome::no_output("down")));
/// assert_eq!(machine.phase(), NotePhase::TitlesParsed);
/// assert_eq!(machine.primary_headline(), Some("小红书笔记"));
/// ```
#[derive(Debug, Clone)]
pub struct NoteMachine<'a> {
    content: &'a str,
    rules: HeadlineRules,
    placeholder: &'a str,
    state: NoteState,
}

impl<'a> NoteMachine<'a> {
    /// Machine in [`NoteState::Init`] for `content`.
    pub fn new(content: &'a str, rules: HeadlineRules, placeholder: &'a str) -> Self {
        Self {
            content,
            rules,
            placeholder,
            state: NoteState::Init,
        }
    }

    /// Current state.
    pub fn state(&self) -> &NoteState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> NotePhase {
        self.state.phase()
    }

    /// Headline the body phase is conditioned on.
    pub fn primary_headline(&self) -> Option<&str> {
        self.state.headlines().map(Headlines::primary)
    }

    fn headlines_from(&self, outcome: CompletionOutcome) -> Headlines {
        let extraction = match outcome {
            CompletionOutcome::Text(text) => parse_headlines(&text, &self.rules),
            CompletionOutcome::NoOutput { .. } => vidnote_core::Extraction::NoneFound,
        };
        let headlines = Headlines::from_extraction(extraction, self.placeholder);
        if headlines.is_placeholder() {
            warn!(phase = %NotePhase::TitlesParsed, "No headline candidates; using placeholder");
        }
        headlines
    }

    /// Apply one event and return the resulting phase.
    pub fn advance(&mut self, event: NoteEvent) -> NotePhase {
        let state = std::mem::replace(&mut self.state, NoteState::Init);
        self.state = match (state, event) {
            (terminal @ (NoteState::Done(_) | NoteState::Failed(_)), _) => terminal,
            (NoteState::Init, NoteEvent::TitlesSent) => NoteState::TitlesRequested,
            (NoteState::TitlesRequested, NoteEvent::TitlesReceived(outcome)) => {
                NoteState::TitlesParsed {
                    headlines: self.headlines_from(outcome),
                }
            }
            (NoteState::TitlesParsed { headlines }, NoteEvent::BodySent) => {
                NoteState::BodyRequested { headlines }
            }
            (NoteState::BodyRequested { headlines }, NoteEvent::BodyReceived(outcome)) => {
                match outcome {
                    CompletionOutcome::Text(body) => NoteState::Done(NoteDraft::generated(body, headlines)),
                    CompletionOutcome::NoOutput { reason } => {
                        warn!(phase = %NotePhase::BodyRequested, reason = %reason, "Body phase failed; passing content through");
                        NoteState::Failed(NoteDraft::passthrough(self.content, headlines))
                    }
                }
            }
            (state, NoteEvent::Abort { reason }) => {
                warn!(phase = %state.phase(), reason = %reason, "Note generation aborted");
                let headlines = state
                    .headlines()
                    .cloned()
                    .unwrap_or_else(|| Headlines::placeholder(self.placeholder));
                NoteState::Failed(NoteDraft::passthrough(self.content, headlines))
            }
            (state, event) => {
                warn!(phase = %state.phase(), event = ?event, "Ignoring event not valid in this phase");
                state
            }
        };
        self.state.phase()
    }

    /// The final draft. A machine stopped early yields a passthrough draft.
    pub fn finish(self) -> NoteDraft {
        match self.state {
            NoteState::Done(draft) | NoteState::Failed(draft) => draft,
            state => {
                let headlines = state
                    .headlines()
                    .cloned()
                    .unwrap_or_else(|| Headlines::placeholder(self.placeholder));
                NoteDraft::passthrough(self.content, headlines)
            }
        }
    }
}

/// Generates short-form notes through a completion driver.
#[derive(Debug, Clone)]
pub struct NoteGenerator<D> {
    driver: D,
    prompts: PromptBuilder,
    rules: HeadlineRules,
    placeholder: String,
    title_sampling: Sampling,
    body_temperature: f32,
    max_tokens: u32,
}

impl<D: CompletionDriver> NoteGenerator<D> {
    /// Generator configured from `[note]` and `[headlines]`.
    pub fn new(driver: D, config: &VidnoteConfig) -> Self {
        let note = &config.note;
        Self {
            driver,
            prompts: PromptBuilder::from_config(note),
            rules: config.headlines,
            placeholder: note.placeholder_title.clone(),
            title_sampling: Sampling::new(note.title_temperature, note.title_max_tokens),
            body_temperature: note.body_temperature,
            max_tokens: note.max_tokens,
        }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Two-phase generation with the configured body cap.
    pub async fn generate(&self, content: &str) -> NoteDraft {
        self.generate_with_limit(content, self.max_tokens).await
    }

    /// Two-phase generation with a caller-supplied body cap.
    ///
    /// Never fails: missing headlines become a placeholder, a missing body
    /// hands `content` back unchanged with no tags.
    #[instrument(skip(self, content), fields(payload_len = content.chars().count(), provider = self.driver.provider_name()))]
    pub async fn generate_with_limit(&self, content: &str, max_tokens: u32) -> NoteDraft {
        let mut machine = NoteMachine::new(content, self.rules, &self.placeholder);

        machine.advance(NoteEvent::TitlesSent);
        let profile = PromptProfile::NoteHeadlines;
        let prompt = self.prompts.build(content, &profile);
        let outcome = complete(&self.driver, profile.phase(), &prompt, self.title_sampling).await;
        machine.advance(NoteEvent::TitlesReceived(outcome));

        let Some(headline) = machine.primary_headline().map(str::to_string) else {
            return machine.finish();
        };
        info!(
            candidates = machine.state().headlines().map_or(0, Headlines::len),
            primary = %crate::text::preview(&headline),
            "Headlines ready"
        );

        machine.advance(NoteEvent::BodySent);
        let profile = PromptProfile::NoteBody {
            headline: &headline,
        };
        let prompt = self.prompts.build(content, &profile);
        let sampling = Sampling::new(self.body_temperature, max_tokens);
        let outcome = complete(&self.driver, profile.phase(), &prompt, sampling).await;
        machine.advance(NoteEvent::BodyReceived(outcome));

        let draft = machine.finish();
        info!(status = %draft.status(), tags = draft.tags().len(), "Note generation finished");
        draft
    }

    /// Single-call generation in the combined "一. 标题 / 二. 正文 / 标签" format.
    ///
    /// No output, or a reply without a body section, yields a passthrough draft.
    #[instrument(skip(self, content), fields(payload_len = content.chars().count(), provider = self.driver.provider_name()))]
    pub async fn generate_combined(&self, content: &str) -> NoteDraft {
        let profile = PromptProfile::NoteCombined;
        let prompt = self.prompts.build(content, &profile);
        let sampling = Sampling::new(self.body_temperature, self.max_tokens);

        let reply = match complete(&self.driver, profile.phase(), &prompt, sampling).await {
            CompletionOutcome::Text(reply) => reply,
            CompletionOutcome::NoOutput { .. } => {
                return NoteDraft::passthrough(content, Headlines::placeholder(&self.placeholder));
            }
        };

        let headlines = Headlines::from_extraction(
            parse_headline_section(&reply, &self.rules),
            &self.placeholder,
        );
        if headlines.is_placeholder() {
            warn!(phase = profile.phase(), "No headline candidates; using placeholder");
        }

        match parse_combined_body(&reply) {
            Some(body) => {
                let tags = parse_tags(&reply);
                info!(candidates = headlines.len(), tags = tags.len(), "Combined note parsed");
                NoteDraft {
                    body,
                    headlines,
                    tags,
                    status: DraftStatus::Generated,
                }
            }
            None => {
                warn!(phase = profile.phase(), "Body section not found; passing content through");
                NoteDraft::passthrough(content, headlines)
            }
        }
    }
}
