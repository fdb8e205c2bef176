use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::overlay::Overlay;
use crate::config::SiteConfig;
use crate::consent::ConsentRecord;
use crate::storage::LocalStore;
use crate::toggle::{Surface, ToggleAction, ToggleState};

/// Settings modal state, owned by `App` so the background scroll lock sees it.
#[derive(Clone, PartialEq)]
pub struct CookieModalHandle(pub UseReducerHandle<ToggleState>);

fn load_consent() -> ConsentRecord {
    LocalStore::open()
        .and_then(|store| ConsentRecord::load(&store))
        .unwrap_or_else(|e| {
            warn!("Could not read cookie consent: {}", e);
            ConsentRecord::Unset
        })
}

fn persist(record: ConsentRecord) {
    // The banner still goes away for this visit if the write fails.
    if let Err(e) = LocalStore::open().and_then(|store| record.save(&store)) {
        error!("Failed to save cookie consent: {}", e);
    }
}

fn is_checked(input: &NodeRef) -> bool {
    input
        .cast::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let banner_visible = use_state(|| false);
    let fallback = use_reducer(|| ToggleState::closed(Surface::CookieModal));
    let modal = use_context::<CookieModalHandle>()
        .map(|handle| handle.0)
        .unwrap_or(fallback);
    let analytics = use_node_ref();
    let marketing = use_node_ref();

    // Delay the banner so it does not flash before the page settles.
    {
        let banner_visible = banner_visible.clone();
        let delay = config.banner_delay_ms;
        use_effect_with_deps(
            move |_| {
                let record = load_consent();
                info!("Cookie consent on load: {:?}", record);
                let timeout = record
                    .needs_banner()
                    .then(|| Timeout::new(delay, move || banner_visible.set(true)));
                move || drop(timeout)
            },
            (),
        );
    }

    let accept_all = {
        let banner_visible = banner_visible.clone();
        Callback::from(move |_: MouseEvent| {
            persist(ConsentRecord::All);
            banner_visible.set(false);
        })
    };

    let save_preferences = {
        let banner_visible = banner_visible.clone();
        let modal = modal.clone();
        let analytics = analytics.clone();
        let marketing = marketing.clone();
        Callback::from(move |_: MouseEvent| {
            persist(ConsentRecord::Custom {
                analytics: is_checked(&analytics),
                marketing: is_checked(&marketing),
            });
            banner_visible.set(false);
            modal.dispatch(ToggleAction::Close);
        })
    };

    let modal_action = |action: ToggleAction| {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(action))
    };

    let on_overlay = {
        let modal = modal.clone();
        Callback::from(move |owner: Surface| modal.dispatch(ToggleAction::OverlayClick(owner)))
    };

    html! {
        <>
            <div id="cookieConsent" class={classes!("cookie-consent", (*banner_visible).then_some("active"))}>
                <div class="cookie-content">
                    <p>
                        {"We use cookies to improve your experience and to understand how our site is used. "}
                        {"You can accept all cookies or choose which ones to allow."}
                    </p>
                    <div class="cookie-buttons">
                        <button id="cookieSettings" class="btn btn-outline" onclick={modal_action(ToggleAction::Open)}>
                            {"Cookie settings"}
                        </button>
                        <button id="acceptAllCookies" class="btn btn-primary" onclick={accept_all}>
                            {"Accept all"}
                        </button>
                    </div>
                </div>
            </div>
            <Overlay
                owner={Surface::CookieModal}
                active={modal.is_open()}
                on_dismiss={on_overlay}
                class="cookie-modal-backdrop"
            >
                <div id="cookieModal" class={classes!("cookie-modal", modal.is_open().then_some("active"))}>
                    <div class="modal-header">
                        <h3>{"Cookie preferences"}</h3>
                        <button id="modalClose" class="modal-close" onclick={modal_action(ToggleAction::Close)}>
                            {"×"}
                        </button>
                    </div>
                    <div class="modal-body">
                        <label class="cookie-option">
                            <input type="checkbox" checked={true} disabled={true} />
                            <span>{"Necessary cookies (always on)"}</span>
                        </label>
                        <label class="cookie-option">
                            <input id="analyticsCookies" type="checkbox" ref={analytics} />
                            <span>{"Analytics cookies"}</span>
                        </label>
                        <label class="cookie-option">
                            <input id="marketingCookies" type="checkbox" ref={marketing} />
                            <span>{"Marketing cookies"}</span>
                        </label>
                    </div>
                    <button id="savePreferences" class="btn btn-primary" onclick={save_preferences}>
                        {"Save preferences"}
                    </button>
                </div>
            </Overlay>
        </>
    }
}
