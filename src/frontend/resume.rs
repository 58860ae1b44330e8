use yew::prelude::*;

use crate::data::{self, section_id, TimelineItem};

fn timeline(heading: &'static str, items: &'static [TimelineItem]) -> Html {
    html! {
        <div class="resume-block">
            <h3>{heading}</h3>
            { for items.iter().map(|item| html! {
                <article class="timeline-item" key={item.title}>
                    <header class="timeline-header">
                        <h4>{item.title}</h4>
                        <div class="timeline-meta">
                            <span class="timeline-location">{item.location}</span>
                            <span class="timeline-date">{item.date}</span>
                        </div>
                    </header>
                    if !item.detail.is_empty() {
                        <p class="timeline-detail">{item.detail}</p>
                    }
                </article>
            }) }
        </div>
    }
}

#[function_component(Resume)]
pub fn resume() -> Html {
    html! {
        <section id={section_id::RESUME} class="resume-section">
            { timeline("Education", data::EDUCATION) }
            { timeline("Work", data::EXPERIENCE) }
            <div class="resume-block">
                <h3>{"Skills"}</h3>
                { for data::SKILL_GROUPS.iter().map(|group| html! {
                    <div class="skill-group" key={group.name}>
                        <h4>{group.name}</h4>
                        { for group.skills.iter().map(|skill| {
                            let width = format!("width: {}%;", u32::from(skill.level) * 10);
                            html! {
                                <div class="skill" key={skill.name}>
                                    <span class="skill-name">{skill.name}</span>
                                    <div class="skill-track">
                                        <div class="skill-fill" style={width} />
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                }) }
            </div>
        </section>
    }
}
