/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use scroll_timeline::catalog::Product;
use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ProductGalleryProps {
    pub products: Vec<Product>,
}

#[function_component(ProductGallery)]
pub fn product_gallery(props: &ProductGalleryProps) -> Html {
    let selected = use_state(|| 0_usize);
    let current = props.products.get(*selected);

    html! {
        <section class="product-gallery" id="products">
            <h2>{"Products"}</h2>
            <div class="product-cards">
                { for props.products.iter().enumerate().map(|(index, product)| {
                    let onclick = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(index))
                    };
                    html! {
                        <button
                            class={classes!("product-card", (index == *selected).then_some("active"))}
                            {onclick}
                        >
                            <img src={product.image.clone()} alt={product.name.clone()} />
                            <span class="product-name">{ &product.name }</span>
                        </button>
                    }
                }) }
            </div>
            if let Some(product) = current {
                <div class="product-detail">
                    <h3>{ &product.name }</h3>
                    <p class="product-tagline">{ &product.tagline }</p>
                    <ul class="product-features">
                        { for product.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
                    </ul>
                </div>
            }
        </section>
    }
}
