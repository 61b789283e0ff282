//! Browser implementations of the theme class, scrolling and analytics seams.
//! On the server each one resolves to its absent or no-op variant.

use crate::analytics::AnalyticsSink;
use crate::navigation::ScrollHost;
use crate::preferences::Theme;
use crate::visibility::{Rect, Viewport};

#[cfg(feature = "hydrate")]
use crate::{
    analytics::{AnalyticsError, AnalyticsEvent},
    preferences::LIGHT_CLASS,
};

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[cfg(feature = "hydrate")]
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    if let Err(err) = root
        .class_list()
        .toggle_with_force(LIGHT_CLASS, theme.root_class().is_some())
    {
        log::warn!("couldn't apply {theme} theme: {err:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn apply_theme(_theme: Theme) {}

/// Smooth-scrolls the document so the anchor's top meets the viewport top.
pub struct DocumentScroll;

impl ScrollHost for DocumentScroll {
    #[cfg(feature = "hydrate")]
    fn scroll_to_anchor(&self, id: &str) -> bool {
        let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(feature = "hydrate"))]
    fn scroll_to_anchor(&self, _id: &str) -> bool {
        false
    }
}

/// Google Analytics' global `gtag` function.
#[cfg(feature = "hydrate")]
pub struct GlobalGtag(js_sys::Function);

#[cfg(feature = "hydrate")]
impl GlobalGtag {
    pub fn detect() -> Option<Self> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &"gtag".into())
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
            .map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl AnalyticsSink for GlobalGtag {
    fn send(&self, event: &AnalyticsEvent<'_>) -> Result<(), AnalyticsError> {
        let rejected = |err: wasm_bindgen::JsValue| AnalyticsError::Rejected(format!("{err:?}"));
        let params = js_sys::Object::new();
        js_sys::Reflect::set(&params, &"page_path".into(), &event.page_path.into())
            .map_err(rejected)?;
        self.0
            .call3(
                &wasm_bindgen::JsValue::NULL,
                &"event".into(),
                &event.name.into(),
                &params,
            )
            .map_err(rejected)?;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub fn analytics_sink() -> Option<Box<dyn AnalyticsSink>> {
    GlobalGtag::detect().map(|gtag| Box::new(gtag) as Box<dyn AnalyticsSink>)
}

#[cfg(not(feature = "hydrate"))]
pub fn analytics_sink() -> Option<Box<dyn AnalyticsSink>> {
    None
}

#[cfg(feature = "hydrate")]
pub fn go_back() {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.back() {
        log::debug!("history.back failed: {err:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn go_back() {}

/// Element bounds and the current viewport size.
#[cfg(feature = "hydrate")]
pub fn measure(el: &web_sys::Element) -> Option<(Rect, Viewport)> {
    let window = web_sys::window()?;
    let viewport = Viewport {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    };
    let bounds = el.get_bounding_client_rect();
    let rect = Rect {
        top: bounds.top(),
        left: bounds.left(),
        bottom: bounds.bottom(),
        right: bounds.right(),
    };
    Some((rect, viewport))
}

#[cfg(not(feature = "hydrate"))]
pub fn measure(_el: &web_sys::Element) -> Option<(Rect, Viewport)> {
    None
}
