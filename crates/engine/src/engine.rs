//! The orchestration engine: owns the summarize and chat pipelines,
//! the task ledger, the history log, and the grounding store.
//!
//! At most one summarize task is in flight. Progress telemetry is
//! advisory only; control flow never branches on it. Every accepted
//! task ends in exactly one terminal notification and a cleared ledger.

use crate::{Backends, ChatContext, SettingsSource, build_exchange, fit};
use skimmer_core::{
    ChatReply, Complete, Event, HistoryEntry, HistoryLog, ProviderKind, Settings, SummaryOutcome,
    Task, TaskStore, Validation, estimate_tokens,
};
use skimmer_memory::{Embedder, Retriever};
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};

/// Buffered events per subscriber before the oldest are dropped.
const EVENT_CAPACITY: usize = 64;

/// How many stored excerpts ground a chat question.
const CHAT_CONTEXT_K: usize = 3;

/// Page content handed to the engine for summarization.
///
/// Empty title or content is valid input; only extraction failure
/// upstream is an error, and that never reaches the engine.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Page title.
    pub title: String,
    /// Extracted page text.
    pub content: String,
    /// Page URL.
    pub url: String,
}

struct Inner<B, S, E> {
    backends: B,
    settings: S,
    embedder: E,
    retriever: Mutex<Retriever>,
    tasks: TaskStore,
    history: HistoryLog,
    events: broadcast::Sender<Event>,
}

/// A cheap-to-clone handle on the engine; clones share all state.
pub struct Engine<B, S, E> {
    inner: Arc<Inner<B, S, E>>,
}

impl<B, S, E> Clone for Engine<B, S, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B, S, E> Engine<B, S, E>
where
    B: Backends,
    S: SettingsSource,
    E: Embedder + 'static,
{
    /// Assemble an engine from its collaborators.
    pub fn new(backends: B, settings: S, embedder: E) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let mut retriever = Retriever::new();
        retriever.ensure_initialized();
        Self {
            inner: Arc::new(Inner {
                backends,
                settings,
                embedder,
                retriever: Mutex::new(retriever),
                tasks: TaskStore::new(),
                history: HistoryLog::new(),
                events,
            }),
        }
    }

    /// Subscribe to progress and completion events.
    ///
    /// Subscribers only see events sent after they subscribe; a slow
    /// subscriber loses the oldest buffered events, never blocks the
    /// engine.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.inner.events.subscribe()
    }

    /// Accept a summarize request and run its pipeline in the
    /// background. Returns the pending task record immediately.
    pub fn summarize(&self, page: PageContent) -> Task {
        let task = self.inner.tasks.begin(&page.title, &page.url);
        let engine = self.clone();
        let task_id = task.id.clone();
        tokio::spawn(async move {
            engine.run_summarize(&task_id, page).await;
        });
        task
    }

    async fn run_summarize(&self, task_id: &str, page: PageContent) {
        let settings = self.inner.settings.load();
        let kind = settings.provider;
        self.inner.tasks.mark_running(task_id);
        self.progress(task_id, 10, "Preparing content...");

        self.store_for_grounding(&page).await;

        let status = if estimate_tokens(&page.title, &page.content) > 4000 {
            "Truncating large content..."
        } else {
            "Content prepared"
        };
        self.progress(task_id, 20, status);

        let fitted = fit(&page.title, &page.content, kind, settings.model(kind));
        self.progress(
            task_id,
            30,
            format!("Sending to {}...", settings.label(kind)),
        );

        let primary = match self.inner.backends.build(&settings, kind) {
            Ok(primary) => primary,
            Err(err) => {
                tracing::warn!(provider = %kind, error = %err, "provider unusable");
                self.progress(task_id, 0, "Summarization failed");
                self.fail(task_id, kind, err.to_string());
                return;
            }
        };

        if kind == ProviderKind::Local {
            self.progress(task_id, 40, "Processing with Local LLM...");
        }
        match primary.summarize(&page.title, &fitted.content).await {
            Ok(summary) => {
                if kind == ProviderKind::Local {
                    self.progress(task_id, 80, "Local LLM response received...");
                }
                self.finish(task_id, &page, summary, kind, false, fitted.truncated);
            }
            Err(primary_err) => {
                tracing::warn!(provider = %kind, error = %primary_err, "summarization failed");
                if kind == ProviderKind::Local {
                    self.progress(task_id, 0, "Local LLM summarization failed");
                    self.fail(
                        task_id,
                        kind,
                        format!("Local LLM summarization failed: {primary_err}"),
                    );
                    return;
                }

                self.progress(
                    task_id,
                    40,
                    format!("{} failed, trying Local LLM...", settings.label(kind)),
                );
                let refit = fit(&page.title, &page.content, ProviderKind::Local, "");
                self.progress(task_id, 50, "Processing with Local LLM fallback...");

                let fallback = self
                    .inner
                    .backends
                    .build(&settings, ProviderKind::Local)
                    .map_err(|err| err.to_string());
                let fallback = match fallback {
                    Ok(local) => local
                        .summarize(&page.title, &refit.content)
                        .await
                        .map_err(|err| err.to_string()),
                    Err(err) => Err(err),
                };
                match fallback {
                    Ok(summary) => {
                        self.progress(task_id, 80, "Local LLM response received...");
                        self.finish(
                            task_id,
                            &page,
                            summary,
                            ProviderKind::Local,
                            true,
                            fitted.truncated,
                        );
                    }
                    Err(local_err) => {
                        tracing::warn!(error = %local_err, "local fallback failed");
                        self.progress(task_id, 0, "All summarization methods failed");
                        self.fail(
                            task_id,
                            kind,
                            format!(
                                "Summarization failed: {primary_err}. \
                                 Fallback also failed: {local_err}"
                            ),
                        );
                    }
                }
            }
        }
    }

    /// Ask a question about previously summarized content. The answer
    /// arrives as a [`Event::ChatResponse`]; delivery is fire-and-forget.
    pub fn chat(&self, question: impl Into<String>, context: ChatContext) {
        let engine = self.clone();
        let question = question.into();
        tokio::spawn(async move {
            engine.run_chat(question, context).await;
        });
    }

    async fn run_chat(&self, question: String, context: ChatContext) {
        let settings = self.inner.settings.load();
        let kind = settings.provider;

        let excerpts = self.relevant_excerpts(&question).await;
        let messages = build_exchange(&context, &excerpts, &question);

        let result = match self.inner.backends.build(&settings, kind) {
            Ok(primary) => primary.chat(&messages).await.map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        match result {
            Ok(answer) => self.send_reply(question, kind, Ok(answer)),
            Err(primary_err) if kind != ProviderKind::Local => {
                tracing::warn!(provider = %kind, error = %primary_err, "chat failed");
                let fallback = match self.inner.backends.build(&settings, ProviderKind::Local) {
                    Ok(local) => local.chat(&messages).await.map_err(|err| err.to_string()),
                    Err(err) => Err(err.to_string()),
                };
                match fallback {
                    Ok(answer) => self.send_reply(question, ProviderKind::Local, Ok(answer)),
                    Err(local_err) => self.send_reply(
                        question,
                        kind,
                        Err(format!("{primary_err}. Fallback also failed: {local_err}")),
                    ),
                }
            }
            Err(err) => self.send_reply(question, kind, Err(err)),
        }
    }

    /// Validate the credential or liveness for `kind` against the
    /// current configuration.
    pub async fn validate(&self, kind: ProviderKind) -> Validation {
        let settings = self.inner.settings.load();
        self.inner.backends.validate(&settings, kind).await
    }

    /// The active task, if one exists and is not stale.
    pub fn active_task(&self) -> Option<Task> {
        self.inner.tasks.active()
    }

    /// Manual recovery: force-clear the task ledger. Idempotent.
    pub fn reset(&self) {
        self.inner.tasks.reset();
    }

    /// Snapshot of the summary history, newest last.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.inner.history.entries()
    }

    /// Current settings snapshot, as the pipelines would see it.
    pub fn settings(&self) -> Settings {
        self.inner.settings.load()
    }

    async fn store_for_grounding(&self, page: &PageContent) {
        if page.content.is_empty() {
            return;
        }
        let embedding = self.inner.embedder.embed(&page.content).await;
        let mut retriever = self.inner.retriever.lock().await;
        if let Err(err) = retriever.add_document(page.content.clone(), embedding) {
            tracing::warn!(error = %err, "failed to store page for chat grounding");
        }
    }

    async fn relevant_excerpts(&self, question: &str) -> Vec<String> {
        let embedding = self.inner.embedder.embed(question).await;
        let retriever = self.inner.retriever.lock().await;
        retriever
            .find_relevant_context(&embedding, CHAT_CONTEXT_K)
            .unwrap_or_default()
    }

    fn finish(
        &self,
        task_id: &str,
        page: &PageContent,
        summary: String,
        provider: ProviderKind,
        used_fallback: bool,
        content_truncated: bool,
    ) {
        self.progress(task_id, 90, "Finalizing summary...");
        self.inner
            .history
            .push(&page.url, &page.title, &summary, provider.as_str());
        self.progress(task_id, 100, "Summary complete!");
        self.inner.tasks.clear();
        self.emit(Event::Complete {
            task_id: task_id.into(),
            outcome: SummaryOutcome {
                success: true,
                summary: Some(summary),
                provider: provider.as_str().into(),
                used_fallback,
                content_truncated,
                error: None,
            },
        });
    }

    fn fail(&self, task_id: &str, provider: ProviderKind, error: String) {
        self.inner.tasks.clear();
        self.emit(Event::Complete {
            task_id: task_id.into(),
            outcome: SummaryOutcome {
                success: false,
                summary: None,
                provider: provider.as_str().into(),
                used_fallback: false,
                content_truncated: false,
                error: Some(error),
            },
        });
    }

    fn send_reply(&self, question: String, provider: ProviderKind, result: Result<String, String>) {
        let reply = match result {
            Ok(answer) => ChatReply {
                question,
                answer: Some(answer),
                provider: provider.as_str().into(),
                success: true,
                error: None,
            },
            Err(error) => ChatReply {
                question,
                answer: None,
                provider: provider.as_str().into(),
                success: false,
                error: Some(error),
            },
        };
        self.emit(Event::ChatResponse { reply });
    }

    fn progress(&self, task_id: &str, percent: u8, status: impl Into<String>) {
        self.emit(Event::Progress {
            task_id: task_id.into(),
            percent,
            status: status.into(),
        });
    }

    fn emit(&self, event: Event) {
        // Zero subscribers is normal (UI closed); the send result is
        // intentionally ignored.
        let _ = self.inner.events.send(event);
    }
}
