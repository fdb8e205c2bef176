use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::config::SiteConfig;
use crate::content::Slide;
use crate::error;
use crate::slider::{Direction, Mode, SliderMsg, SliderState};

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<Slide>,
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let len = props.slides.len();
    let slider = use_reducer(move || SliderState::new(len));

    // Auto-advance. A new timer generation tears the old interval down first,
    // so there is never more than one live interval.
    {
        let dispatcher = slider.dispatcher();
        let interval_ms = config.slide_interval_ms;
        use_effect_with_deps(
            move |timer: &Option<u64>| {
                let interval = timer.map(|_| {
                    Interval::new(interval_ms, move || dispatcher.dispatch(SliderMsg::Tick))
                });
                move || drop(interval)
            },
            slider.timer(),
        );
    }

    {
        let dispatcher = slider.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&e.key()) {
                dispatcher.dispatch(SliderMsg::Arrow(direction));
            }
        });
    }

    // visibilitychange fires on the document, not the window.
    {
        let dispatcher = slider.dispatcher();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = document.map(|document| {
                    let target = document.clone();
                    let callback = Closure::<dyn Fn()>::new(move || {
                        dispatcher.dispatch(SliderMsg::VisibilityChanged {
                            hidden: target.hidden(),
                        });
                    });
                    error::warn_on_failure(
                        "watch page visibility",
                        document.add_event_listener_with_callback(
                            "visibilitychange",
                            callback.as_ref().unchecked_ref(),
                        ),
                    );
                    (document, callback)
                });
                move || {
                    if let Some((document, callback)) = listener {
                        error::warn_on_failure(
                            "stop watching page visibility",
                            document.remove_event_listener_with_callback(
                                "visibilitychange",
                                callback.as_ref().unchecked_ref(),
                            ),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_hover = |msg: SliderMsg| {
        let dispatcher = slider.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(msg))
    };

    html! {
        <section
            id="heroSlider"
            class={classes!("hero-slider", (slider.mode() == Mode::Paused).then_some("paused"))}
            onmouseenter={on_hover(SliderMsg::HoverEnter)}
            onmouseleave={on_hover(SliderMsg::HoverLeave)}
        >
            <div class="slides">
                { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                    <div class={classes!("slide", slider.is_active(i).then_some("active"))}>
                        <img src={slide.image} alt={slide.title} />
                        <div class="slide-content">
                            <h1>{slide.title}</h1>
                            <p>{slide.subtitle}</p>
                            <AnchorLink href={slide.cta_href} class="btn btn-primary">
                                {slide.cta_label}
                            </AnchorLink>
                        </div>
                    </div>
                }) }
            </div>
            <div class="slider-indicators">
                { for (0..slider.len()).map(|i| {
                    let dispatcher = slider.dispatcher();
                    html! {
                        <button
                            class={classes!("indicator", slider.is_active(i).then_some("active"))}
                            aria-label={format!("Show slide {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(SliderMsg::Select(i)))}
                        />
                    }
                }) }
            </div>
            <span class="sr-only" aria-live="polite">{ slider.position_label() }</span>
        </section>
    }
}
