use std::rc::Rc;

use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config::SiteConfig;
use crate::contact::{MessageSender, SimulatedSender};
use crate::reveal::use_scroll_reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    use_scroll_reveal(config.reveal_threshold, config.reveal_root_margin.clone());

    let delay = config.submit_delay_ms;
    let sender = use_state(move || -> Rc<dyn MessageSender> { Rc::new(SimulatedSender::new(delay)) });

    html! {
        <main class="contact-page">
            <section id="contact" class="contact-section">
                <div class="contact-info scroll-reveal">
                    <h1>{"Talk to a lighting designer"}</h1>
                    <p>{"Tell us about your project and we will get back to you within two working days."}</p>
                    <ul>
                        <li>{"hello@astrolighting.example"}</li>
                        <li>{"+44 20 0000 0000"}</li>
                    </ul>
                </div>
                <div class="contact-form-wrapper scroll-reveal">
                    <ContactForm sender={(*sender).clone()} />
                </div>
            </section>
        </main>
    }
}
