use yew::prelude::*;

use crate::content::Product;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

/// Product tile; its overlay, when it has one, shows only while hovered.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let hovered = use_state(|| false);
    let product = &props.product;

    let set_hovered = |value: bool| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(value))
    };

    html! {
        <article
            class="product-card scroll-reveal"
            onmouseenter={set_hovered(true)}
            onmouseleave={set_hovered(false)}
        >
            <div class="product-image">
                <img src={product.image} alt={product.name} loading="lazy" />
                {
                    if let Some(text) = product.overlay_text {
                        html! {
                            <div class="product-overlay" style={format!("opacity: {};", if *hovered { "1" } else { "0" })}>
                                <span>{text}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="product-info">
                <span class="product-category">{product.category}</span>
                <h3>{product.name}</h3>
            </div>
        </article>
    }
}
