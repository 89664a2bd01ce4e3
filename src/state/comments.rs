//! Comment panel controller.
//!
//! DESIGN
//! ======
//! The controller owns the display preference and a generation counter.
//! All operations take `&self`, so several can be in flight at once on the
//! UI thread. Each load takes a fresh generation; when its response
//! arrives, it is only applied if no newer load has started since.
//!
//! ERROR HANDLING
//! ==============
//! Operations never return errors. Every failure becomes exactly one
//! notification and an outcome value for the caller to inspect. A failed
//! load leaves the panel showing its last successful render.

use std::cell::Cell;
use std::rc::Rc;

use crate::net::PortfolioApi;
use crate::render::{Notifier, PanelSink, RenderedPanel};

use super::preference::DisplayPreference;

pub const DELETE_SUCCESS_MESSAGE: &str = "A truly sad day, your comments were deleted";
pub const DELETE_FAILURE_MESSAGE: &str = "Something went wrong in deleting your comments";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Something went wrong in posting your comment";

/// Result of a single comment load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The panel now shows `count` comments.
    Rendered { count: usize },
    /// A newer load started before this one finished; its response was dropped.
    Superseded,
    /// The fetch failed and the user was notified.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { reload: LoadOutcome },
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted { reload: LoadOutcome },
    Failed,
}

pub struct CommentPanel<A: ?Sized> {
    api: Rc<A>,
    panel: Rc<dyn PanelSink>,
    notifier: Rc<dyn Notifier>,
    default_preference: DisplayPreference,
    preference: Cell<DisplayPreference>,
    generation: Cell<u64>,
}

impl<A: PortfolioApi + ?Sized> CommentPanel<A> {
    pub fn new(
        api: Rc<A>,
        panel: Rc<dyn PanelSink>,
        notifier: Rc<dyn Notifier>,
        default_preference: DisplayPreference,
    ) -> Self {
        Self {
            api,
            panel,
            notifier,
            default_preference,
            preference: Cell::new(default_preference),
            generation: Cell::new(0),
        }
    }

    /// Current display preference.
    #[must_use]
    pub fn preference(&self) -> DisplayPreference {
        self.preference.get()
    }

    /// Load using the current display preference.
    pub async fn load_comments(&self) -> LoadOutcome {
        self.load_comments_with(self.preference.get()).await
    }

    /// Request up to `limit` comments and render them on success.
    pub async fn load_comments_with(&self, limit: DisplayPreference) -> LoadOutcome {
        let generation = self.next_generation();
        tracing::debug!(limit = limit.get(), generation, "loading comments");

        match self.api.fetch_comments(limit.get()).await {
            Ok(comments) => {
                if generation != self.generation.get() {
                    tracing::debug!(generation, latest = self.generation.get(), "dropping superseded comments");
                    return LoadOutcome::Superseded;
                }
                let rendered = RenderedPanel::from_comments(&comments);
                self.panel.replace(&rendered);
                tracing::info!(count = rendered.len(), limit = limit.get(), "rendered comments");
                LoadOutcome::Rendered { count: rendered.len() }
            }
            Err(error) => {
                tracing::warn!(%error, limit = limit.get(), "failed to load comments");
                self.notifier
                    .notify(&format!("Hey!! There was an error: {}", error.user_message()));
                LoadOutcome::Failed
            }
        }
    }

    /// Store `limit` as the new preference, then reload with it.
    ///
    /// The preference is kept even if the reload fails.
    pub async fn update_preference(&self, limit: DisplayPreference) -> LoadOutcome {
        self.preference.set(limit);
        tracing::info!(limit = limit.get(), "display preference updated");
        self.load_comments_with(limit).await
    }

    /// Parse the raw max-comments input and apply it via [`Self::update_preference`].
    pub async fn update_preference_from_input(&self, raw: &str) -> LoadOutcome {
        let limit = DisplayPreference::from_input(raw, self.default_preference);
        self.update_preference(limit).await
    }

    /// Delete every stored comment, then reload with the current preference.
    pub async fn delete_all_comments(&self) -> DeleteOutcome {
        match self.api.delete_comments().await {
            Ok(()) => {
                tracing::info!("comments deleted");
                self.notifier.notify(DELETE_SUCCESS_MESSAGE);
                let reload = self.load_comments().await;
                DeleteOutcome::Deleted { reload }
            }
            Err(error) => {
                tracing::warn!(%error, "failed to delete comments");
                self.notifier.notify(DELETE_FAILURE_MESSAGE);
                DeleteOutcome::Failed
            }
        }
    }

    /// Post a new comment, then reload with the current preference.
    pub async fn submit_comment(&self, text: &str) -> SubmitOutcome {
        match self.api.submit_comment(text).await {
            Ok(()) => {
                tracing::info!(len = text.len(), "comment submitted");
                let reload = self.load_comments().await;
                SubmitOutcome::Submitted { reload }
            }
            Err(error) => {
                tracing::warn!(%error, "failed to submit comment");
                self.notifier.notify(SUBMIT_FAILURE_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod tests;
