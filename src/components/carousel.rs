use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::CarouselItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    /// Horizontal offset for one click. Clamping is left to the scroll container.
    pub fn offset(self, amount: f64) -> f64 {
        match self {
            Step::Prev => -amount,
            Step::Next => amount,
        }
    }
}

fn scroll_track(track: &NodeRef, step: Step, amount: f64) {
    // An absent track makes the controls inert.
    if let Some(track) = track.cast::<Element>() {
        let options = ScrollToOptions::new();
        options.set_left(step.offset(amount));
        options.set_behavior(ScrollBehavior::Smooth);
        track.scroll_by_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Prefix for the `{id}Prev`, `{id}Next` and `{id}Carousel` element ids.
    pub id: AttrValue,
    pub title: AttrValue,
    pub items: Vec<CarouselItem>,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let track = use_node_ref();

    let on_step = |step: Step| {
        let track = track.clone();
        let amount = config.carousel_step_px;
        Callback::from(move |_: MouseEvent| scroll_track(&track, step, amount))
    };

    html! {
        <section id={props.id.clone()} class="carousel-section scroll-reveal">
            <div class="section-header">
                <h2>{props.title.clone()}</h2>
                <div class="carousel-controls">
                    <button id={format!("{}Prev", props.id)} class="carousel-btn" aria-label="Previous" onclick={on_step(Step::Prev)}>
                        {"‹"}
                    </button>
                    <button id={format!("{}Next", props.id)} class="carousel-btn" aria-label="Next" onclick={on_step(Step::Next)}>
                        {"›"}
                    </button>
                </div>
            </div>
            <div id={format!("{}Carousel", props.id)} class="carousel-track" ref={track.clone()}>
                { for props.items.iter().map(|item| html! {
                    <article class="carousel-card">
                        <img src={item.image} alt={item.title} loading="lazy" />
                        <h3>{item.title}</h3>
                        <p>{item.caption}</p>
                    </article>
                }) }
            </div>
        </section>
    }
}
