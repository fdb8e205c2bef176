use std::rc::Rc;

use log::{debug, error, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{self, Array};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::contact::{self, ContactMessage, MessageSender, SubmitOutcome, SubmitView, BUSY_LABEL};
use crate::error::{self, SiteError};

#[derive(Properties)]
pub struct ContactFormProps {
    pub sender: Rc<dyn MessageSender>,
    #[prop_or(AttrValue::from("Send message"))]
    pub submit_label: AttrValue,
}

impl PartialEq for ContactFormProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sender, &other.sender) && self.submit_label == other.submit_label
    }
}

struct FormView {
    form: HtmlFormElement,
    busy: UseStateHandle<bool>,
}

impl SubmitView for FormView {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn notify(&self, notice: &str) {
        if let Err(e) = error::window().and_then(|w| w.alert_with_message(notice).map_err(SiteError::from)) {
            error!("Failed to show notice: {}", e);
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

fn collect_fields(form: &HtmlFormElement) -> Result<ContactMessage, SiteError> {
    let data: JsValue = FormData::new_with_form(form)?.into();
    let mut message = ContactMessage::default();
    if let Some(entries) = js_sys::try_iter(&data)? {
        for entry in entries {
            let pair: Array = entry?.unchecked_into();
            // File inputs have no string value and are skipped.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                message.insert(name, value);
            }
        }
    }
    Ok(message)
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let busy = use_state(|| false);
    let form_ref = use_node_ref();

    let onsubmit = {
        let busy = busy.clone();
        let form_ref = form_ref.clone();
        let sender = props.sender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = match form_ref.cast::<HtmlFormElement>() {
                Some(form) => form,
                None => return,
            };
            let message = match collect_fields(&form) {
                Ok(message) => message,
                Err(err) => {
                    error!("Could not read contact form: {}", err);
                    return;
                }
            };
            if message.is_empty() {
                debug!("Submitting an empty contact form");
            } else {
                debug!("Submitting contact form with {} fields", message.len());
            }

            let view = FormView {
                form,
                busy: busy.clone(),
            };
            let sender = sender.clone();
            spawn_local(async move {
                match contact::submit(sender.as_ref(), message, &view).await {
                    SubmitOutcome::Sent => info!("Contact message delivered"),
                    SubmitOutcome::Failed(reason) => warn!("Contact message failed: {}", reason),
                }
            });
        })
    };

    html! {
        <form id="contactForm" class="contact-form" ref={form_ref} {onsubmit}>
            <div class="form-row">
                <label for="name">{"Name"}</label>
                <input id="name" name="name" type="text" />
            </div>
            <div class="form-row">
                <label for="email">{"Email"}</label>
                <input id="email" name="email" type="email" />
            </div>
            <div class="form-row">
                <label for="company">{"Company"}</label>
                <input id="company" name="company" type="text" />
            </div>
            <div class="form-row">
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="6" />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*busy}>
                { if *busy { BUSY_LABEL.to_string() } else { props.submit_label.to_string() } }
            </button>
        </form>
    }
}
