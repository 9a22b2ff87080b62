use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::catalog::courses::COURSE_OPTIONS;
use crate::components::layout::Layout;
use crate::components::popular_times::PopularTimes;
use crate::components::reveal::{Direction, Reveal};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::links::{self, ContactField, ContactForm};

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);

    let update = {
        let form = form.clone();
        move |field: ContactField, value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    };

    let on_input = |field: ContactField| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(field, input.value());
        })
    };

    let on_course = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(ContactField::Course, select.value());
        })
    };

    let on_message = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update(ContactField::Message, area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                error.set(Some("Please enter your name and phone number.".to_string()));
                return;
            }
            error.set(None);
            let link = form.inquiry_link();
            log::info!("Opening WhatsApp inquiry");
            match web_sys::window() {
                Some(window) => {
                    if let Err(e) = window.open_with_url_and_target(&link, "_blank") {
                        log::warn!("could not open WhatsApp: {:?}", e);
                    }
                }
                None => log::warn!("no window to open WhatsApp from"),
            }
        })
    };

    html! {
        <Layout>
            <div class="contact-page">
                <section class="page-hero">
                    <div class="hero-content">
                        <span class="hero-badge">{"Get in Touch"}</span>
                        <h1>{"Contact Us"}</h1>
                        <p>{"Have questions? Ready to enroll? Send us an inquiry and we will get back to you on WhatsApp."}</p>
                    </div>
                </section>

                <section class="contact-section">
                    <Reveal direction={Direction::Left}>
                        <div class="card form-card">
                            <h2>{"Send an Inquiry"}</h2>
                            <form {onsubmit}>
                                <div class="form-group">
                                    <label for="name">{"Full Name *"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required=true
                                        value={form.name.clone()}
                                        oninput={on_input(ContactField::Name)}
                                        placeholder="Enter your full name"
                                    />
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="phone">{"Phone Number *"}</label>
                                        <input
                                            type="tel"
                                            id="phone"
                                            name="phone"
                                            required=true
                                            value={form.phone.clone()}
                                            oninput={on_input(ContactField::Phone)}
                                            placeholder="+91 XXXXX XXXXX"
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="email">{"Email Address"}</label>
                                        <input
                                            type="email"
                                            id="email"
                                            name="email"
                                            value={form.email.clone()}
                                            oninput={on_input(ContactField::Email)}
                                            placeholder="your@email.com"
                                        />
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label for="course">{"Course Interest"}</label>
                                    <select id="course" name="course" onchange={on_course}>
                                        <option value="" selected={form.course.is_empty()}>{"Select a course"}</option>
                                        { for COURSE_OPTIONS.iter().map(|(value, label)| html! {
                                            <option value={*value} selected={form.course == *value}>{*label}</option>
                                        }) }
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label for="message">{"Message"}</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="4"
                                        value={form.message.clone()}
                                        oninput={on_message}
                                        placeholder="Tell us about your requirements..."
                                    />
                                </div>
                                {
                                    if let Some(message) = (*error).as_ref() {
                                        html! { <p class="form-error">{message.clone()}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <button type="submit" class="cta-accent full-width">
                                    <i class="send-icon"></i>
                                    {"Send via WhatsApp"}
                                </button>
                            </form>
                        </div>
                    </Reveal>

                    <Reveal direction={Direction::Right}>
                        <div class="card contact-card">
                            <h3>{"Contact Details"}</h3>
                            <div class="contact-row">
                                <i class="map-pin-icon"></i>
                                <div>
                                    <h4>{"Address"}</h4>
                                    <p>{config::ADDRESS}</p>
                                </div>
                            </div>
                            <div class="contact-row">
                                <i class="phone-icon"></i>
                                <div>
                                    <h4>{"Phone"}</h4>
                                    <a href={links::tel_link()}>{config::PHONE_DISPLAY}</a>
                                </div>
                            </div>
                            <div class="contact-row">
                                <i class="mail-icon"></i>
                                <div>
                                    <h4>{"Email"}</h4>
                                    <a href={links::mailto_link()}>{config::EMAIL}</a>
                                </div>
                            </div>
                            <div class="contact-row">
                                <i class="clock-icon"></i>
                                <div>
                                    <h4>{"Working Hours"}</h4>
                                    <p>{config::HOURS_WEEKDAYS}<br />{config::HOURS_SUNDAY}</p>
                                </div>
                            </div>
                            <div class="button-row">
                                <a href={links::whatsapp_chat()} target="_blank" rel="noopener noreferrer" class="cta-primary">
                                    <i class="message-icon"></i>
                                    {"Chat on WhatsApp"}
                                </a>
                                <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer" class="cta-outline">
                                    {"Facebook"}
                                </a>
                            </div>
                        </div>
                        <div class="map-frame">
                            <iframe
                                src={config::MAP_EMBED_URL}
                                width="100%"
                                height="300"
                                style="border: 0;"
                                allowfullscreen=true
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Master Motor Training College Location"
                            />
                        </div>
                    </Reveal>
                </section>

                <section class="popular-times-section">
                    <SectionHeading
                        title="Popular Times"
                        subtitle="Best times to visit for shorter wait times"
                    />
                    <Reveal>
                        <PopularTimes />
                    </Reveal>
                </section>
            </div>
        </Layout>
    }
}
