use yew::prelude::*;
use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(true)]
    pub centered: bool,
    /// White text for headings on the dark navy sections.
    #[prop_or(false)]
    pub light: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let tone = if props.light { "light" } else { "dark" };
    html! {
        <Reveal class={classes!("section-heading", tone, props.centered.then(|| "centered"))}>
            <h2 class="heading-section">{&props.title}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
            <div class="heading-rule">
                <span class="rule-bar"></span>
                <span class="rule-dot"></span>
                <span class="rule-bar"></span>
            </div>
        </Reveal>
    }
}
