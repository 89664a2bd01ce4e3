//! Browser bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The DOM regions become sinks, `window.alert` is the notifier, and the
//! map and chart widgets are reached through `window.portfolioWidgets`, a
//! small JS object the page provides with `drawMap`, `drawChart` and an
//! optional `chartsReady` promise. Buttons on the page call the exported
//! `updateMaxComments`, `deleteComments` and `submitComment` handlers.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::display::happiness::CountryScore;
use crate::display::travel_map::{LatLng, MapView, TravelMarker};
use crate::net::HttpBackend;
use crate::page::{Page, PageSinks};
use crate::render::{ChartSink, MapSink, Notifier, PanelSink, RenderError, RenderedPanel, TextSink};
use crate::state::{CommentPanel, DisplayPreference};

pub const GREETING_CONTAINER_ID: &str = "greeting-container";
pub const COMMENTS_CONTAINER_ID: &str = "comments";
pub const MAX_COMMENTS_INPUT_ID: &str = "maxComments--number-input";
pub const MAP_CONTAINER_ID: &str = "map";
pub const CHART_CONTAINER_ID: &str = "happiness-chart";
const WIDGET_BRIDGE: &str = "portfolioWidgets";

thread_local! {
    static PANEL: RefCell<Option<Rc<CommentPanel<HttpBackend>>>> = const { RefCell::new(None) };
}

// =============================================================================
// DOM SINKS
// =============================================================================

fn element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Writes plain text into an element.
pub struct ElementText(pub &'static str);

impl TextSink for ElementText {
    fn replace_text(&self, text: &str) {
        match element(self.0) {
            Some(el) => el.set_text_content(Some(text)),
            None => tracing::warn!(id = self.0, "text container missing"),
        }
    }
}

/// Replaces an element's HTML with the rendered panel.
pub struct ElementHtml(pub &'static str);

impl PanelSink for ElementHtml {
    fn replace(&self, panel: &RenderedPanel) {
        match element(self.0) {
            Some(el) => el.set_inner_html(&panel.to_html()),
            None => tracing::warn!(id = self.0, "comments container missing"),
        }
    }
}

pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(message, "no window to alert on");
            return;
        };
        if let Err(error) = window.alert_with_message(message) {
            tracing::warn!(?error, "alert failed");
        }
    }
}

// =============================================================================
// WIDGET BRIDGE
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapPayload<'a> {
    container_id: &'a str,
    center: LatLng,
    zoom: u8,
    markers: Vec<MarkerPayload<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerPayload<'a> {
    position: LatLng,
    title: &'a str,
    icon: &'a str,
    popup_html: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartPayload<'a> {
    container_id: &'a str,
    rows: &'a [CountryScore],
}

fn js_error(value: JsValue) -> RenderError {
    RenderError::Widget(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn bridge() -> Result<JsValue, RenderError> {
    let window = web_sys::window().ok_or_else(|| RenderError::Widget("no window".into()))?;
    let bridge = js_sys::Reflect::get(&window, &JsValue::from_str(WIDGET_BRIDGE)).map_err(js_error)?;
    if bridge.is_undefined() {
        return Err(RenderError::Widget(format!("window.{WIDGET_BRIDGE} is not defined")));
    }
    Ok(bridge)
}

fn call_bridge(method: &str, payload: &impl Serialize) -> Result<(), RenderError> {
    let bridge = bridge()?;
    let function: js_sys::Function = js_sys::Reflect::get(&bridge, &JsValue::from_str(method))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let json = serde_json::to_string(payload).map_err(|e| RenderError::Widget(e.to_string()))?;
    let argument = js_sys::JSON::parse(&json).map_err(js_error)?;
    function.call1(&bridge, &argument).map_err(js_error)?;
    Ok(())
}

pub struct BridgeMap(pub &'static str);

impl MapSink for BridgeMap {
    fn draw(&self, view: &MapView, markers: &[TravelMarker]) -> Result<(), RenderError> {
        let payload = MapPayload {
            container_id: self.0,
            center: view.center,
            zoom: view.zoom,
            markers: markers
                .iter()
                .map(|marker| MarkerPayload {
                    position: marker.position,
                    title: &marker.title,
                    icon: &marker.icon,
                    popup_html: marker.popup_html(),
                })
                .collect(),
        };
        call_bridge("drawMap", &payload)
    }
}

pub struct BridgeChart(pub &'static str);

#[async_trait::async_trait(?Send)]
impl ChartSink for BridgeChart {
    async fn ready(&self) -> Result<(), RenderError> {
        let bridge = bridge()?;
        let ready = js_sys::Reflect::get(&bridge, &JsValue::from_str("chartsReady")).map_err(js_error)?;
        if ready.is_undefined() {
            return Ok(());
        }
        let promise: js_sys::Promise = ready.dyn_into().map_err(js_error)?;
        wasm_bindgen_futures::JsFuture::from(promise).await.map_err(js_error)?;
        Ok(())
    }

    fn draw(&self, rows: &[CountryScore]) -> Result<(), RenderError> {
        call_bridge("drawChart", &ChartPayload { container_id: self.0, rows })
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Page-load entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&error.to_string()));
    }

    let origin = web_sys::window()
        .map(|w| w.location())
        .and_then(|location| location.origin().map_err(|error| tracing::warn!(?error, "no origin")).ok());
    let mut config = PageConfig::default();
    if let Some(origin) = origin {
        config = config.with_base_url(&origin);
    }

    let api = match HttpBackend::new(&config) {
        Ok(api) => Rc::new(api),
        Err(error) => {
            tracing::error!(%error, "backend client unavailable");
            return;
        }
    };

    let sinks = PageSinks {
        greeting: Rc::new(ElementText(GREETING_CONTAINER_ID)),
        comments: Rc::new(ElementHtml(COMMENTS_CONTAINER_ID)),
        notifier: Rc::new(WindowAlert),
        map: Rc::new(BridgeMap(MAP_CONTAINER_ID)),
        chart: Rc::new(BridgeChart(CHART_CONTAINER_ID)),
    };
    let page = Page::new(api, sinks, DisplayPreference::new(config.default_max_comments));
    PANEL.with(|slot| *slot.borrow_mut() = Some(page.panel()));

    wasm_bindgen_futures::spawn_local(async move {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);
        page.init(&mut rng).await;
    });
}

fn with_panel(action: impl FnOnce(Rc<CommentPanel<HttpBackend>>)) {
    match PANEL.with(|slot| slot.borrow().clone()) {
        Some(panel) => action(panel),
        None => tracing::warn!("comment panel not initialized"),
    }
}

/// Handler for the max-comments "update" button.
#[wasm_bindgen(js_name = updateMaxComments)]
pub fn update_max_comments() {
    let raw = element(MAX_COMMENTS_INPUT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().map_err(|_| tracing::warn!("max comments input is not an <input>")).ok())
        .map(|input| input.value())
        .unwrap_or_default();
    with_panel(|panel| {
        wasm_bindgen_futures::spawn_local(async move {
            panel.update_preference_from_input(&raw).await;
        });
    });
}

/// Handler for the "delete all comments" button.
#[wasm_bindgen(js_name = deleteComments)]
pub fn delete_comments() {
    with_panel(|panel| {
        wasm_bindgen_futures::spawn_local(async move {
            panel.delete_all_comments().await;
        });
    });
}

/// Handler for the comment form.
#[wasm_bindgen(js_name = submitComment)]
pub fn submit_comment(text: String) {
    with_panel(|panel| {
        wasm_bindgen_futures::spawn_local(async move {
            panel.submit_comment(&text).await;
        });
    });
}
