use yew::prelude::*;

use crate::data::{self, section_id};

use super::github::GithubActivity;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={section_id::ABOUT} class="about-section">
            <div class="about-grid">
                <div class="about-portrait">
                    <img alt="Portrait of Chris Gibson" src={data::ABOUT.profile_image} loading="lazy" />
                </div>
                <div class="about-body">
                    <h2>{"About me"}</h2>
                    { for data::ABOUT.paragraphs.iter().map(|paragraph| html! {
                        <p class="about-copy">{*paragraph}</p>
                    }) }
                    <ul class="about-details">
                        { for data::ABOUT.details.iter().map(|detail| html! {
                            <li class="about-detail" key={detail.label}>
                                <span class="about-detail-label">{detail.label}</span>
                                <span class="about-detail-text">{detail.text}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="about-github">
                <GithubActivity />
            </div>
        </section>
    }
}
