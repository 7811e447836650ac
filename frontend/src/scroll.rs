use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::SCROLL_OFFSET_PX;

/// Scroll position for `container` that leaves `offset` pixels above the
/// target. Positions are viewport-relative tops, as `getBoundingClientRect`
/// reports them.
pub fn offset_position(target_top: f64, container_top: f64, container_scroll_top: f64, offset: f64) -> f64 {
    (target_top - container_top + container_scroll_top - offset).max(0.0)
}

/// Smooth-scrolls the `container_id` element so `target_id` sits just below
/// its top edge. Missing elements are ignored.
pub fn scroll_section_into_view(container_id: &str, target_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Some(container), Some(target)) = (
        document.get_element_by_id(container_id),
        document.get_element_by_id(target_id),
    ) else {
        return;
    };

    let top = offset_position(
        target.get_bounding_client_rect().top(),
        container.get_bounding_client_rect().top(),
        f64::from(container.scroll_top()),
        SCROLL_OFFSET_PX,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_to_with_scroll_to_options(&options);
}

/// Scrolls now and again after layout has had a chance to settle, since
/// images above the section can still be loading.
pub fn scroll_section_with_retries(container_id: &'static str, target_id: &'static str) -> Vec<Timeout> {
    scroll_section_into_view(container_id, target_id);
    [100, 300]
        .into_iter()
        .map(|delay| Timeout::new(delay, move || scroll_section_into_view(container_id, target_id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_accounts_for_existing_scroll() {
        assert_eq!(offset_position(900.0, 80.0, 0.0, 100.0), 720.0);
        assert_eq!(offset_position(300.0, 80.0, 500.0, 100.0), 620.0);
    }

    #[test]
    fn offset_never_goes_negative() {
        assert_eq!(offset_position(120.0, 80.0, 0.0, 100.0), 0.0);
    }
}
