use web_sys::Element;
use yew::prelude::*;

use crate::toggle::Surface;

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub owner: Surface,
    pub active: bool,
    pub on_dismiss: Callback<Surface>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Dimming layer owned by exactly one surface. Only clicks that land on the
/// layer itself dismiss it; clicks on its children do not.
///
/// Yew delegates listeners to the document body, so `current_target` is not
/// the layer. The clicked element is matched by its id instead.
#[function_component(Overlay)]
pub fn overlay(props: &OverlayProps) -> Html {
    let onclick = {
        let owner = props.owner;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            let target_id = e
                .target_dyn_into::<Element>()
                .map(|element| element.id())
                .unwrap_or_default();
            if owner.is_direct_hit(&target_id) {
                on_dismiss.emit(owner);
            }
        })
    };

    html! {
        <div
            id={props.owner.overlay_id()}
            class={classes!("overlay", props.class.clone(), props.active.then_some("active"))}
            {onclick}
        >
            { for props.children.iter() }
        </div>
    }
}
