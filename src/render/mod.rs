//! Rendering sinks.
//!
//! DESIGN
//! ======
//! The page never touches the DOM or a widget library directly. Each
//! output region is a small trait so the browser, the terminal and tests
//! can supply their own implementation.

pub mod panel;

pub use panel::{RenderedPanel, escape_html};

use crate::display::happiness::CountryScore;
use crate::display::travel_map::{MapView, TravelMarker};

/// Errors raised by widget sinks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("widget failed: {0}")]
    Widget(String),
}

/// Plain text region (the greeting container).
pub trait TextSink {
    fn replace_text(&self, text: &str);
}

/// The comment panel. Each call fully replaces the previous content.
pub trait PanelSink {
    fn replace(&self, panel: &RenderedPanel);
}

/// Modal, user-visible notification (`window.alert` in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Map widget: draws a base map and its markers, wiring each marker's
/// click to its popup.
pub trait MapSink {
    /// # Errors
    ///
    /// Returns [`RenderError`] if the widget could not draw.
    fn draw(&self, view: &MapView, markers: &[TravelMarker]) -> Result<(), RenderError>;
}

/// Geographic chart widget.
#[async_trait::async_trait(?Send)]
pub trait ChartSink {
    /// Resolves once the widget library has finished loading.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the library failed to load.
    async fn ready(&self) -> Result<(), RenderError> {
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RenderError`] if the widget could not draw.
    fn draw(&self, rows: &[CountryScore]) -> Result<(), RenderError>;
}
