use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};

use crate::catalog::faq::{Faq, FaqCategory, BLOG_POSTS, FAQS};
use crate::components::layout::Layout;
use crate::components::reveal::{stagger, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::filter::{visible_items, Category, FilterState};
use crate::links;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    faq: Faq,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.faq.question}</span>
                <span class="toggle-icon"><i class="chevron-down-icon"></i></span>
            </button>
            {
                if props.is_open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.faq.answer}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let filter = use_state(FilterState::<FaqCategory>::default);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.set_search_query(input.value(), &FAQS);
            filter.set(next);
        })
    };

    let tabs = FaqCategory::ALL.iter().map(|category| {
        let category = *category;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                log::debug!("faq category selected: {}", category.label());
                let mut next = (*filter).clone();
                next.select_category(category, &FAQS);
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

    let visible = visible_items(&FAQS, &*filter);
    let answers = visible.iter().enumerate().map(|(position, (index, faq))| {
        let index = *index;
        let on_toggle = {
            let filter = filter.clone();
            Callback::from(move |_: ()| {
                log::debug!("faq item toggled: {}", index);
                let mut next = (*filter).clone();
                next.toggle_item(index);
                filter.set(next);
            })
        };
        html! {
            <Reveal key={index} delay_ms={stagger(position, 50)}>
                <FaqItem faq={(*faq).clone()} is_open={filter.is_expanded(index)} {on_toggle} />
            </Reveal>
        }
    });

    html! {
        <Layout>
            <div class="faq-page">
                <section class="page-hero">
                    <div class="hero-content">
                        <span class="hero-badge">{"Help Center"}</span>
                        <h1>{"FAQ & Blog"}</h1>
                        <p>{"Find answers to common questions or explore our driving tips and guides."}</p>
                    </div>
                </section>

                <section class="faq-search">
                    <div class="search-box">
                        <i class="search-icon"></i>
                        <input
                            type="text"
                            value={filter.search_query.clone()}
                            oninput={on_search}
                            placeholder="Search frequently asked questions..."
                        />
                    </div>
                </section>

                <section class="faq-section">
                    <SectionHeading
                        title="Frequently Asked Questions"
                        subtitle="Quick answers to help you get started"
                    />

                    <div class="category-tabs">
                        { for tabs }
                    </div>

                    <div class="faq-list">
                        { for answers }
                        {
                            if visible.is_empty() {
                                html! {
                                    <div class="empty-state">
                                        <p>{"No FAQs found matching your search."}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>

                    <Reveal class="ask-question" delay_ms={300}>
                        <p>{"Can't find what you're looking for?"}</p>
                        <a
                            href={links::whatsapp_link("I have a question")}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="cta-accent"
                        >
                            <i class="message-icon"></i>
                            {"Ask a Question"}
                        </a>
                    </Reveal>
                </section>

                <section class="blog-section">
                    <SectionHeading
                        title="Driving Tips & Guides"
                        subtitle="Expert advice to make you a better driver"
                    />
                    <div class="blog-grid">
                        { for BLOG_POSTS.iter().enumerate().map(|(i, post)| html! {
                            <Reveal key={post.title} delay_ms={stagger(i, 100)}>
                                <article class="card blog-card">
                                    <span class="blog-date">{post.date}</span>
                                    <h3>{post.title}</h3>
                                    <p>{post.excerpt}</p>
                                    <span class="read-more">{"Read More"}<i class="arrow-right-icon"></i></span>
                                </article>
                            </Reveal>
                        }) }
                    </div>
                </section>
            </div>
        </Layout>
    }
}
