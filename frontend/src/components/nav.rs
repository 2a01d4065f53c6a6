use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{window, HtmlElement};

use crate::site;

/// In-page anchors shown in the header and the mobile panel.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Services", "#services"),
    ("Solutions", "#solutions"),
    ("Industries", "#industries"),
    ("Contact", "#contact"),
];

/// Header gets its solid background after this many pixels.
const SCROLLED_OFFSET: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Holds `body { overflow: hidden }` for as long as it lives and puts the
/// previous value back on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let restored = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
        if restored.is_err() {
            log::warn!("Failed to release body scroll lock");
        }
    }
}

#[function_component(LogoMark)]
pub fn logo_mark() -> Html {
    html! {
        <div class="logo">
            <div class="logo-mark"><span>{"A"}</span></div>
            <div class="logo-text">
                <div class="logo-name">{site::BRAND}</div>
                <div class="logo-sub">{site::BRAND_SUFFIX}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    // Locked while open; the cleanup runs on close and on unmount alike.
    use_effect_with_deps(
        |open| {
            let lock = if *open { ScrollLock::acquire() } else { None };
            move || drop(lock)
        },
        props.open,
    );

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("mobile-menu", props.open.then_some("open"))} aria-hidden={(!props.open).to_string()}>
            <div class="mobile-menu-backdrop" onclick={close.clone()} />
            <div class="mobile-menu-panel">
                <div class="mobile-menu-header">
                    <LogoMark />
                    <button class="icon-button" onclick={close.clone()} aria-label="Close menu">{"✕"}</button>
                </div>
                <div class="mobile-menu-links">
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="mobile-menu-link" onclick={close.clone()}>{*label}</a>
                    }) }
                    <a href="#contact" class="button-primary wide" onclick={close.clone()}>
                        {"Book a Consultation"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(MenuState::default);
    let (_, scroll_y) = use_window_scroll();

    let open_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(MenuState::Closed))
    };

    html! {
        <>
            <MobileMenu open={menu.is_open()} on_close={close_menu} />
            <header class={classes!("site-header", (scroll_y > SCROLLED_OFFSET).then_some("scrolled"))}>
                <div class="container header-row">
                    <a href="#top" class="logo-link"><LogoMark /></a>
                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} class="nav-link">{*label}</a>
                        }) }
                    </nav>
                    <div class="header-actions">
                        <a href="#contact" class="button-primary small hide-mobile">{"Book a Consultation"}</a>
                        <button class="icon-button burger" onclick={open_menu} aria-label="Open menu">{"☰"}</button>
                    </div>
                </div>
            </header>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggling_flips_state() {
        let menu = MenuState::Closed.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.toggled(), MenuState::Closed);
    }

    #[test]
    fn every_link_targets_an_anchor() {
        for (_, href) in NAV_LINKS {
            assert!(href.starts_with('#'));
        }
    }
}
