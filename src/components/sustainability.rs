use log::warn;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SiteConfig;
use crate::parallax;

fn apply_parallax(section: &NodeRef, background: &NodeRef, config: &SiteConfig) {
    let (section, background) = match (section.cast::<Element>(), background.cast::<HtmlElement>()) {
        (Some(section), Some(background)) => (section, background),
        _ => return,
    };
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    if let Some(transform) = parallax::background_transform(
        section.get_bounding_client_rect().top(),
        viewport_height,
        config.parallax_factor_px,
        config.parallax_scale,
    ) {
        if let Err(e) = background.style().set_property("transform", &transform) {
            warn!("Failed to move parallax background: {:?}", e);
        }
    }
}

#[function_component(Sustainability)]
pub fn sustainability() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let section = use_node_ref();
    let background = use_node_ref();

    {
        let section = section.clone();
        let background = background.clone();
        use_event_with_window("scroll", move |_: Event| {
            apply_parallax(&section, &background, &config);
        });
    }

    html! {
        <section id="sustainability" class="sustainability-section" ref={section}>
            <div class="sustainability-bg">
                <img src="/assets/sustainability.jpg" alt="" ref={background} />
            </div>
            <div class="sustainability-content scroll-reveal">
                <h2>{"Built to last, designed to save"}</h2>
                <p>
                    {"Our luminaires are modular and repairable, use recycled aluminium, "}
                    {"and draw a fraction of the energy of the fittings they replace."}
                </p>
            </div>
        </section>
    }
}
