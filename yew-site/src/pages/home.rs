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

use std::rc::Rc;

use log::{info, warn};
use scroll_timeline::SceneCatalog;
use yew::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::contact_form::ContactFormView;
use crate::components::product_gallery::ProductGallery;
use crate::components::scene_viewer::SceneViewer;
use crate::components::scrolly_section::ScrollySection;
use crate::components::scrub_hero::ScrubHero;
use crate::components::tablet_demo::TabletSection;
use crate::components::theater::TheaterOverlay;
use crate::constants::runtime_config;
use crate::context::{use_video_src, TheaterCtx};

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_memo((), |_| SceneCatalog::home().map(Rc::new));
    let config = use_memo((), |_| runtime_config());
    let hero_src = use_video_src();
    let theater = use_context::<TheaterCtx>();

    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            match catalog.as_ref() {
                Ok(catalog) => {
                    let issues = catalog.config_issues();
                    for issue in &issues {
                        warn!("Home catalog: {issue}");
                    }
                    info!(
                        "Home catalog loaded: {} scenes, {} tablet scenes, {} issues",
                        catalog.scenes.len(),
                        catalog.tablets.len(),
                        issues.len()
                    );
                }
                Err(e) => warn!("Home catalog failed to load: {e}"),
            }
            || ()
        });
    }

    let catalog = match catalog.as_ref() {
        Ok(catalog) => catalog.clone(),
        Err(e) => return html! { <ConfigError message={e.to_string()} /> },
    };

    let focused = theater
        .as_ref()
        .and_then(|theater| (**theater).clone())
        .and_then(|id| catalog.sections.iter().find(|section| section.id == id).cloned());
    let on_close = theater.clone().map(|theater| Callback::from(move |_: ()| theater.set(None)));

    html! {
        <main class="home-page">
            <ScrubHero
                src={hero_src}
                product_src={config.product_video_src.clone()}
                title="See what matters. Without cameras."
                subtitle="Touchless sensing that keeps seniors safe and families informed."
            />
            <SceneViewer catalog={catalog.clone()} />
            { for catalog.tablets.iter().map(|tablet| html! {
                <TabletSection
                    key={tablet.scene}
                    tablet={tablet.clone()}
                    scene={catalog.scene(tablet.scene).cloned()}
                />
            }) }
            { for catalog.sections.iter().map(|section| html! {
                <ScrollySection key={section.id.clone()} config={section.clone()} />
            }) }
            <ProductGallery products={catalog.products.clone()} />
            <section class="home-contact">
                <h2>{"Get in touch"}</h2>
                <ContactFormView page_name="Home" />
            </section>
            if let (Some(section), Some(on_close)) = (focused, on_close) {
                <TheaterOverlay src={section.src.clone()} title={section.title.clone()} {on_close} />
            }
        </main>
    }
}
