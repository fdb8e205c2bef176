use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::hero_slider::HeroSlider;
use crate::components::product_card::ProductCard;
use crate::components::sustainability::Sustainability;
use crate::config::SiteConfig;
use crate::content::{CATEGORIES, HERO_SLIDES, PRODUCTS, PROJECTS, TYPES};
use crate::reveal::use_scroll_reveal;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    use_scroll_reveal(config.reveal_threshold, config.reveal_root_margin.clone());

    use_effect_with_deps(
        |_| {
            info!("Home page mounted with {} slides", HERO_SLIDES.len());
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <HeroSlider slides={HERO_SLIDES.to_vec()} />

            <section id="products" class="products-section">
                <div class="section-header scroll-reveal">
                    <h2>{"Featured products"}</h2>
                    <p>{"A selection from this season's collection."}</p>
                </div>
                <div class="product-grid">
                    { for PRODUCTS.iter().map(|product| html! {
                        <ProductCard product={product.clone()} />
                    }) }
                </div>
            </section>

            <Carousel id="categories" title="Shop by category" items={CATEGORIES.to_vec()} />
            <Carousel id="types" title="Shop by type" items={TYPES.to_vec()} />
            <Sustainability />
            <Carousel id="projects" title="Recent projects" items={PROJECTS.to_vec()} />

            <section id="contact" class="cta-section scroll-reveal">
                <h2>{"Planning a project?"}</h2>
                <p>{"Our lighting designers help with specification, samples and site visits."}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Get in touch"}
                </Link<Route>>
            </section>
        </main>
    }
}
