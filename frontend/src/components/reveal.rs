use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction (0.0..=1.0) that counts as "in view".
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Fire-once visibility flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    /// Feeds one observation. Returns `true` only for the observation that
    /// flips the latch; later calls never return `true` again.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.revealed || !intersecting || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    node: &NodeRef,
    options: &RevealOptions,
    on_reveal: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let element = node.cast::<Element>()?;
    let mut latch = RevealLatch::new(options.threshold);

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                observer.disconnect();
                log::debug!("Revealed element after crossing threshold");
                on_reveal.set(true);
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(&element);
    Some((observer, callback))
}

/// Returns `false` until `node` first becomes visible enough, then `true` for
/// good. The observer is disconnected on the first trigger and on unmount. If
/// the node is never attached the result stays `false`.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        let already = *visible;
        use_effect_with_deps(
            move |(node, options)| {
                let observed = if already { None } else { observe_once(node, options, setter) };
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger for siblings revealed together.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub options: RevealOptions,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.options.clone());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node} class={classes!("reveal", visible.then_some("visible"), props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl RevealLatch {
        fn is_revealed(&self) -> bool {
            self.revealed
        }
    }

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::new(0.1);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn flips_once_when_threshold_crossed() {
        let mut latch = RevealLatch::new(0.25);
        assert!(!latch.observe(0.1, true));
        assert!(latch.observe(0.3, true));
        assert!(latch.is_revealed());
        assert!(!latch.observe(0.9, true));
    }

    #[test]
    fn scrolling_back_out_does_not_hide() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.observe(0.5, true));
        assert!(!latch.observe(0.0, false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(0.0, false));
        assert!(latch.observe(0.0, true));
    }

    #[test]
    fn threshold_is_clamped() {
        let mut latch = RevealLatch::new(3.0);
        assert!(!latch.observe(0.99, true));
        assert!(latch.observe(1.0, true));
    }

    #[test]
    fn default_options_match_section_reveal() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }
}
