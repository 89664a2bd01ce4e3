//! Page-load entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Page::init` runs every section once. The sections do not depend on
//! each other: a failing chart does not stop the comments from loading,
//! and none of them share state. The comment panel outlives `init` so UI
//! events can keep driving it.

use std::rc::Rc;

use rand::Rng;

use crate::display::happiness::{self, ChartError};
use crate::display::{composition, greeting, travel_map};
use crate::net::PortfolioApi;
use crate::render::{ChartSink, MapSink, Notifier, PanelSink, RenderError, TextSink};
use crate::state::{CommentPanel, DisplayPreference, LoadOutcome};

/// Every rendering sink the page writes to.
#[derive(Clone)]
pub struct PageSinks {
    pub greeting: Rc<dyn TextSink>,
    pub comments: Rc<dyn PanelSink>,
    pub notifier: Rc<dyn Notifier>,
    pub map: Rc<dyn MapSink>,
    pub chart: Rc<dyn ChartSink>,
}

/// What each section did during [`Page::init`].
#[derive(Debug)]
pub struct PageReport {
    pub demo_alerts: usize,
    pub greeting: &'static str,
    pub map: Result<usize, RenderError>,
    pub comments: LoadOutcome,
    pub chart: Result<usize, ChartError>,
}

pub struct Page<A: ?Sized> {
    api: Rc<A>,
    sinks: PageSinks,
    panel: Rc<CommentPanel<A>>,
}

impl<A: PortfolioApi + ?Sized> Page<A> {
    pub fn new(api: Rc<A>, sinks: PageSinks, default_preference: DisplayPreference) -> Self {
        let panel = Rc::new(CommentPanel::new(
            Rc::clone(&api),
            Rc::clone(&sinks.comments),
            Rc::clone(&sinks.notifier),
            default_preference,
        ));
        Self { api, sinks, panel }
    }

    /// Shared handle to the comment panel for UI event handlers.
    #[must_use]
    pub fn panel(&self) -> Rc<CommentPanel<A>> {
        Rc::clone(&self.panel)
    }

    /// Run every page section once.
    pub async fn init<R: Rng + ?Sized>(&self, rng: &mut R) -> PageReport {
        let demo_alerts = composition::run_demo(self.sinks.notifier.as_ref());
        let greeting = greeting::add_random_greeting(self.sinks.greeting.as_ref(), rng);

        let map = travel_map::render(self.sinks.map.as_ref());
        if let Err(error) = &map {
            tracing::warn!(%error, "travel map failed to render");
        }

        let (comments, chart) = futures::join!(
            self.panel.load_comments(),
            happiness::render(self.api.as_ref(), self.sinks.chart.as_ref()),
        );
        if let Err(error) = &chart {
            tracing::warn!(%error, "happiness chart failed to render");
        }

        tracing::info!(greeting, ?comments, "page initialized");
        PageReport { demo_alerts, greeting, map, comments, chart }
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
