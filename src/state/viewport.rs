//! Viewport Classification
//!
//! Narrow/wide breakpoint detection driving the responsive layout override.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Width in CSS pixels below which the viewport is considered narrow.
/// Matches the Tailwind `md` breakpoint used by the page markup.
pub const NARROW_MAX_WIDTH: f64 = 768.0;

/// Coarse viewport classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn is_narrow(&self) -> bool {
        matches!(self, ViewportClass::Narrow)
    }
}

/// Classify a viewport width in CSS pixels
pub fn classify_width(width: f64) -> ViewportClass {
    if width < NARROW_MAX_WIDTH {
        ViewportClass::Narrow
    } else {
        ViewportClass::Wide
    }
}

/// Current viewport width, if a window is available
fn current_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Reactive viewport classification, updated on window resize
pub fn use_viewport_class() -> RwSignal<ViewportClass> {
    let class = create_rw_signal(classify_width(current_width().unwrap_or(NARROW_MAX_WIDTH)));

    if let Some(window) = web_sys::window() {
        let on_resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(width) = current_width() {
                let next = classify_width(width);
                if class.get_untracked() != next {
                    class.set(next);
                }
            }
        }) as Box<dyn FnMut(_)>);

        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            web_sys::console::error_1(&"failed to attach viewport resize listener".into());
        }
        on_resize.forget();
    }

    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_width() {
        assert_eq!(classify_width(320.0), ViewportClass::Narrow);
        assert_eq!(classify_width(767.9), ViewportClass::Narrow);
        assert_eq!(classify_width(768.0), ViewportClass::Wide);
        assert_eq!(classify_width(1440.0), ViewportClass::Wide);
    }

    #[test]
    fn test_is_narrow() {
        assert!(ViewportClass::Narrow.is_narrow());
        assert!(!ViewportClass::Wide.is_narrow());
    }
}
