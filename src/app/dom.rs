//! Browser-only side effects. Every helper is a no-op when rendering on the server.

use crate::{scroll::SectionBounds, settings::Settings};

#[cfg(feature = "hydrate")]
pub fn scroll_to_section(id: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let Some(el) = leptos::prelude::document().get_element_by_id(id) else {
        log::debug!("no section with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to_section(_id: &str) {}

#[cfg(feature = "hydrate")]
pub fn scroll_to_top() {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    leptos::prelude::window().scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to_top() {}

/// Current document offsets of the sections in `ids`, skipping any not rendered.
#[cfg(feature = "hydrate")]
pub fn section_bounds(ids: &[&'static str]) -> Vec<SectionBounds> {
    use wasm_bindgen::JsCast;

    let document = leptos::prelude::document();
    ids.iter()
        .filter_map(|id| {
            let el = document
                .get_element_by_id(id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: *id,
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
pub fn section_bounds(_ids: &[&'static str]) -> Vec<SectionBounds> {
    Vec::new()
}

/// Mirror the settings' CSS variables onto the document root for plain stylesheet rules.
#[cfg(feature = "hydrate")]
pub fn apply_style_vars(settings: &Settings) {
    let Some(root) = leptos::prelude::document().document_element() else {
        return;
    };
    if let Err(e) = root.set_attribute("style", &settings.style_attr()) {
        log::warn!("couldn't apply style variables: {e:?}");
    }
    if let Err(e) = root.set_attribute("data-theme", settings.theme.as_str()) {
        log::warn!("couldn't apply theme: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn apply_style_vars(_settings: &Settings) {}
