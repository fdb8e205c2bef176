use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::overlay::Overlay;
use crate::config::SiteConfig;
use crate::toggle::{Surface, ToggleAction, ToggleState};
use crate::Route;

pub const HEADER_ID: &str = "header";

/// Shared handle to the mobile menu so in-page links can close it.
pub type MenuHandle = UseReducerHandle<ToggleState>;

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#products", "Products"),
    ("#categories", "Categories"),
    ("#projects", "Projects"),
    ("#sustainability", "Sustainability"),
    ("#contact", "Get in touch"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let menu = use_context::<MenuHandle>();
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        let threshold = config.header_scroll_threshold_px;
        use_effect_with_deps(
            move |_| {
                scrolled.set(is_scrolled(current_scroll_y(), threshold));
                || ()
            },
            (),
        );
    }

    {
        let scrolled = scrolled.clone();
        let threshold = config.header_scroll_threshold_px;
        use_event_with_window("scroll", move |_: Event| {
            scrolled.set(is_scrolled(current_scroll_y(), threshold));
        });
    }

    let menu_open = menu.as_ref().map(|m| m.is_open()).unwrap_or(false);
    let dispatch = |action: ToggleAction| {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(menu) = &menu {
                menu.dispatch(action);
            }
        })
    };
    let on_overlay = {
        let menu = menu.clone();
        Callback::from(move |owner: Surface| {
            if let Some(menu) = &menu {
                menu.dispatch(ToggleAction::OverlayClick(owner));
            }
        })
    };

    let links = || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                html! {
                    <AnchorLink href={*href} class="nav-link">{*label}</AnchorLink>
                }
            })
            .collect::<Html>()
    };

    html! {
        <>
            <header id={HEADER_ID} class={classes!("header", (*scrolled).then_some("scrolled"))}>
                <div class="header-content">
                    <Link<Route> to={Route::Home} classes="logo">
                        {"Astro Lighting"}
                    </Link<Route>>
                    <nav class="nav-desktop">
                        { links() }
                        <Link<Route> to={Route::Contact} classes="nav-link nav-cta">
                            {"Contact"}
                        </Link<Route>>
                    </nav>
                    <button id="mobileMenuBtn" class="mobile-menu-btn" onclick={dispatch(ToggleAction::Open)}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <aside id="mobileMenu" class={classes!("mobile-menu", menu_open.then_some("active"))}>
                <button id="mobileMenuClose" class="mobile-menu-close" onclick={dispatch(ToggleAction::Close)}>
                    {"×"}
                </button>
                <nav class="nav-mobile">
                    { links() }
                    <Link<Route> to={Route::Contact} classes="nav-link">
                        {"Contact"}
                    </Link<Route>>
                </nav>
            </aside>
            <Overlay owner={Surface::MobileMenu} active={menu_open} on_dismiss={on_overlay} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_appears_only_past_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
