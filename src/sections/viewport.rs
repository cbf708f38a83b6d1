//! Reads section geometry out of the live document.

use web_sys::{window, Element};

use crate::sections::tracker::{SectionRect, Sections, Viewport};

/// Geometry of every section inside `container`, or `None` when there is no
/// window to measure.
pub fn snapshot(container: &Element, sections: &Sections) -> Option<Viewport> {
    let window = window()?;
    let document = window.document()?;
    let height = window.inner_height().ok()?.as_f64()?;

    let rects = sections
        .ids()
        .iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionRect::new(id.as_str(), rect.top(), rect.height()))
        })
        .collect();

    Some(Viewport {
        scroll_offset: f64::from(container.scroll_top()),
        height,
        sections: rects,
    })
}

/// Scrolls `container` so the section's top meets the viewport top. Smoothing
/// comes from the container's `scroll-behavior`.
pub fn scroll_to_section(container: &Element, id: &str) {
    let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let top = section.get_bounding_client_rect().top();
    let target = f64::from(container.scroll_top()) + top;
    container.set_scroll_top(target.round() as i32);
}
