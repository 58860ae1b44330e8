use yew::prelude::*;

use crate::data::{self, section_id};

use super::icons;

#[function_component(Socials)]
pub fn socials() -> Html {
    html! {
        <>
            { for data::SOCIAL_LINKS.iter().map(|link| html! {
                <a
                    class="social-link"
                    key={link.label}
                    aria-label={link.label}
                    href={link.href}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { icons::contact_icon(link.kind, "social-icon") }
                </a>
            }) }
        </>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let background_style = format!(
        "background-image: url('{}');",
        data::HERO.background_image
    );

    html! {
        <section id={section_id::HERO} class="hero-section" style={background_style}>
            <div class="hero-panel">
                <h1 class="hero-name">{data::HERO.name}</h1>
                { for data::HERO.paragraphs.iter().map(|paragraph| html! {
                    <p class="hero-copy">{*paragraph}</p>
                }) }
                <div class="hero-socials">
                    <Socials />
                </div>
                <div class="hero-actions">
                    { for data::HERO.actions.iter().map(|action| {
                        let class = if action.primary {
                            "hero-action is-primary"
                        } else {
                            "hero-action"
                        };
                        html! {
                            <a class={class} key={action.label} href={action.href}>
                                {action.label}
                            </a>
                        }
                    }) }
                </div>
            </div>
            <a class="hero-scroll-hint" href={format!("#{}", section_id::ABOUT)} aria-label="Scroll to about section">
                <span aria-hidden="true">{"▾"}</span>
            </a>
        </section>
    }
}
