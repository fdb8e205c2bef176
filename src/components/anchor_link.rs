use log::error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::anchor;
use crate::components::header::{MenuHandle, HEADER_ID};
use crate::error::{self, SiteError};
use crate::toggle::ToggleAction;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly to its target, leaving room for the
/// fixed header, and closes the mobile menu afterwards.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let menu = use_context::<MenuHandle>();

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            let id = match anchor::fragment_target(&href) {
                Some(id) => id,
                None => return,
            };
            match scroll_to_fragment(id, &e) {
                Ok(true) => {
                    if let Some(menu) = &menu {
                        menu.dispatch(ToggleAction::Close);
                    }
                }
                Ok(false) => {}
                Err(err) => error!("Anchor scroll to #{} failed: {}", id, err),
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

/// Returns `Ok(false)` when nothing on the page carries the id, in which case
/// the browser keeps its default behaviour.
fn scroll_to_fragment(id: &str, event: &MouseEvent) -> Result<bool, SiteError> {
    let window = error::window()?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let target = match document.get_element_by_id(id) {
        Some(target) => target,
        None => return Ok(false),
    };
    event.prevent_default();

    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);
    let top = anchor::scroll_offset(
        target.get_bounding_client_rect().top(),
        window.scroll_y()?,
        header_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}
