use yew::prelude::*;

/// Narrow viewports get `mobile_src` when one is given.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Placeholder {
    /// Pulsing neutral block.
    #[default]
    Pulse,
    /// Tiny preview scaled up and blurred until the real asset arrives.
    Blur { preview_src: AttrValue },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    /// The main asset failed. The fallback, if any, is now loading.
    Failed,
    FallbackLoaded,
    FallbackFailed,
}

impl LoadState {
    /// A loaded state never goes back to a placeholder.
    pub fn on_load(self) -> Self {
        match self {
            LoadState::Pending => LoadState::Loaded,
            LoadState::Failed => LoadState::FallbackLoaded,
            other => other,
        }
    }

    pub fn on_error(self) -> Self {
        match self {
            LoadState::Pending => LoadState::Failed,
            LoadState::Failed => LoadState::FallbackFailed,
            other => other,
        }
    }

    /// Once the main asset has failed the image stays on the fallback.
    pub fn on_fallback(self) -> bool {
        matches!(
            self,
            LoadState::Failed | LoadState::FallbackLoaded | LoadState::FallbackFailed
        )
    }

    pub fn shows_placeholder(self) -> bool {
        !matches!(self, LoadState::Loaded | LoadState::FallbackLoaded)
    }
}

/// Which asset the `<img>` should point at for a given state.
pub fn current_src<'a>(state: LoadState, src: &'a str, fallback: Option<&'a str>) -> &'a str {
    match fallback {
        Some(fallback) if state.on_fallback() => fallback,
        _ => src,
    }
}

#[derive(Properties, PartialEq)]
pub struct SmartImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub mobile_src: Option<AttrValue>,
    /// Shown after the main asset fails. Without one the placeholder stays.
    #[prop_or_default]
    pub fallback_src: Option<AttrValue>,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
    /// Above-the-fold images fetch eagerly.
    #[prop_or_default]
    pub priority: bool,
    #[prop_or_default]
    pub placeholder: Placeholder,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SmartImage)]
pub fn smart_image(props: &SmartImageProps) -> Html {
    let state = use_state_eq(LoadState::default);

    {
        // A new asset starts over.
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.set(LoadState::Pending);
                || ()
            },
            props.src.clone(),
        );
    }

    let onload = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(state.on_load()))
    };

    let onerror = {
        let state = state.clone();
        let src = props.src.clone();
        let fallback = props.fallback_src.clone();
        Callback::from(move |_: Event| {
            match (*state, &fallback) {
                (LoadState::Pending, Some(fallback)) => {
                    log::debug!("Image {} failed to load, trying {}", src, fallback)
                }
                (LoadState::Pending, None) => {
                    log::debug!("Image {} failed to load, keeping placeholder", src)
                }
                (LoadState::Failed, _) => log::debug!("Fallback for {} failed too", src),
                _ => {}
            }
            state.set(state.on_error());
        })
    };

    let placeholder_visible = state.shows_placeholder();
    let src = current_src(*state, &props.src, props.fallback_src.as_deref()).to_string();
    let use_mobile = !state.on_fallback();

    let (loading, fetchpriority) = if props.priority { ("eager", "high") } else { ("lazy", "auto") };
    let width = props.width.map(|w| w.to_string());
    let height = props.height.map(|h| h.to_string());

    let placeholder = match &props.placeholder {
        Placeholder::Pulse => html! {
            <div class={classes!("smart-image-pulse", (!placeholder_visible).then_some("hidden"))} aria-hidden="true" />
        },
        Placeholder::Blur { preview_src } => html! {
            <img
                class={classes!("smart-image-preview", (!placeholder_visible).then_some("hidden"))}
                src={preview_src.clone()}
                alt=""
                aria-hidden="true"
            />
        },
    };

    html! {
        <div class={classes!("smart-image", props.class.clone())}>
            { placeholder }
            <picture>
                if let (Some(mobile), true) = (props.mobile_src.clone(), use_mobile) {
                    <source media={MOBILE_MEDIA_QUERY} srcset={mobile} />
                }
                <img
                    class={classes!("smart-image-asset", (!placeholder_visible).then_some("loaded"))}
                    {src}
                    alt={props.alt.clone()}
                    {width}
                    {height}
                    {loading}
                    {fetchpriority}
                    decoding="async"
                    {onload}
                    {onerror}
                />
            </picture>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_shows_placeholder() {
        assert!(LoadState::Pending.shows_placeholder());
        assert_eq!(current_src(LoadState::Pending, "hero.webp", Some("hero.jpg")), "hero.webp");
    }

    #[test]
    fn load_is_terminal() {
        let state = LoadState::Pending.on_load();
        assert_eq!(state, LoadState::Loaded);
        assert_eq!(state.on_error(), LoadState::Loaded);
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn failure_without_fallback_keeps_placeholder() {
        let state = LoadState::Pending.on_error();
        assert_eq!(state, LoadState::Failed);
        assert!(state.shows_placeholder());
        assert_eq!(current_src(state, "hero.webp", None), "hero.webp");
    }

    #[test]
    fn failure_swaps_to_fallback_and_waits_for_it() {
        let state = LoadState::Pending.on_error();
        assert!(state.shows_placeholder());
        assert!(state.on_fallback());
        assert_eq!(current_src(state, "hero.webp", Some("hero.jpg")), "hero.jpg");
    }

    #[test]
    fn fallback_load_completes() {
        let state = LoadState::Pending.on_error().on_load();
        assert_eq!(state, LoadState::FallbackLoaded);
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn loaded_fallback_stays_on_fallback_asset() {
        let state = LoadState::Pending.on_error().on_load();
        assert_eq!(current_src(state, "hero.webp", Some("hero.jpg")), "hero.jpg");
        assert!(state.on_fallback());
        assert_eq!(state.on_error(), LoadState::FallbackLoaded);
        assert_eq!(state.on_load(), LoadState::FallbackLoaded);
    }

    #[test]
    fn fallback_failure_shows_placeholder_over_fallback() {
        let state = LoadState::Pending.on_error().on_error();
        assert_eq!(state, LoadState::FallbackFailed);
        assert!(state.shows_placeholder());
        assert_eq!(current_src(state, "hero.webp", Some("hero.jpg")), "hero.jpg");
        assert_eq!(state.on_load(), LoadState::FallbackFailed);
    }

    #[test]
    fn default_placeholder_pulses() {
        assert_eq!(Placeholder::default(), Placeholder::Pulse);
    }
}
