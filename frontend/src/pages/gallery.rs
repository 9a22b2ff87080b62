use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::gallery::{GalleryCategory, GALLERY_IMAGES};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Direction, Reveal};
use crate::config;
use crate::filter::{visible_items, Category, FilterState};
use crate::links;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let filter = use_state(FilterState::<GalleryCategory>::default);
    // Catalog index of the image shown in the lightbox.
    let selected = use_state(|| None::<usize>);

    let tabs = GalleryCategory::ALL.iter().map(|category| {
        let category = *category;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                log::debug!("gallery category selected: {}", category.label());
                let mut next = (*filter).clone();
                next.select_category(category, &GALLERY_IMAGES);
                filter.set(next);
            })
        };
        let active = filter.selected_category == category;
        html! {
            <button key={category.label()} class={classes!("category-tab", active.then(|| "active"))} {onclick}>
                {category.label()}
            </button>
        }
    });

    let visible = visible_items(&GALLERY_IMAGES, &*filter);
    let tiles = visible.iter().enumerate().map(|(position, (index, image))| {
        let index = *index;
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(index)))
        };
        html! {
            <Reveal key={index} delay_ms={stagger(position, 50)} direction={Direction::Scale}>
                <div class="gallery-tile" {onclick}>
                    <img src={config::asset(image.file)} alt={image.alt} />
                    <div class="gallery-overlay">
                        <i class="zoom-in-icon"></i>
                    </div>
                </div>
            </Reveal>
        }
    });

    let close_lightbox = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    // Clicks on the image itself must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <Layout>
            <div class="gallery-page">
                <section class="page-hero">
                    <div class="hero-content">
                        <span class="hero-badge">{"79+ Photos"}</span>
                        <h1>{"Our Gallery"}</h1>
                        <p>{"See our training facilities, vehicles, and happy students in action."}</p>
                    </div>
                </section>

                <section class="gallery-filter">
                    <div class="category-tabs">
                        { for tabs }
                    </div>
                </section>

                <section class="gallery-section">
                    <div class="gallery-grid">
                        { for tiles }
                    </div>
                    {
                        if visible.is_empty() {
                            html! {
                                <div class="empty-state">
                                    <i class="camera-icon"></i>
                                    <p>{"No photos in this category yet."}</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </section>

                <section class="gallery-share">
                    <Reveal>
                        <h3>{"ARE YOU A STUDENT?"}</h3>
                        <p>{"Share your training photos with us and get featured in our gallery!"}</p>
                        <a
                            href={links::whatsapp_link("I want to share my training photos")}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="cta-primary"
                        >
                            <i class="camera-icon"></i>
                            {"Share Your Photos"}
                        </a>
                    </Reveal>
                </section>

                {
                    if let Some(image) = (*selected).and_then(|i| GALLERY_IMAGES.get(i)) {
                        html! {
                            <div class="lightbox" onclick={close_lightbox.clone()}>
                                <button class="lightbox-close" onclick={close_lightbox} aria-label="Close">
                                    <i class="x-icon"></i>
                                </button>
                                <img src={config::asset(image.file)} alt={image.alt} onclick={keep_open} />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </Layout>
    }
}
