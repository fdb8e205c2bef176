use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod anchor;
mod config;
mod consent;
mod contact;
mod content;
mod error;
mod parallax;
mod reveal;
mod slider;
mod storage;
mod toggle;
mod components {
    pub mod anchor_link;
    pub mod carousel;
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod header;
    pub mod hero_slider;
    pub mod overlay;
    pub mod product_card;
    pub mod sustainability;
}
mod pages {
    pub mod contact;
    pub mod home;
}

use components::cookie_consent::{CookieConsent, CookieModalHandle};
use components::header::{Header, MenuHandle};
use config::SiteConfig;
use pages::{contact::Contact, home::Home};
use toggle::{Surface, ToggleState};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
                </main>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let menu = use_reducer(|| ToggleState::closed(Surface::MobileMenu));
    let modal = use_reducer(|| ToggleState::closed(Surface::CookieModal));

    // The page stays locked while any surface is open.
    {
        let locked = toggle::background_locked(&[&*menu, &*modal]);
        use_effect_with_deps(
            move |locked: &bool| {
                toggle::lock_background_scroll(*locked);
                || ()
            },
            locked,
        );
    }

    use_effect_with_deps(
        |_| {
            info!("Astro Lighting website initialized successfully!");
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <ContextProvider<MenuHandle> context={menu}>
            <ContextProvider<CookieModalHandle> context={CookieModalHandle(modal)}>
                <BrowserRouter>
                    <Header />
                    <Switch<Route> render={switch} />
                    <footer class="footer">
                        <p>{"© Astro Lighting. All rights reserved."}</p>
                    </footer>
                </BrowserRouter>
                <CookieConsent />
            </ContextProvider<CookieModalHandle>>
            </ContextProvider<MenuHandle>>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = SiteConfig::load();
    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
