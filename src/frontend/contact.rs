use yew::prelude::*;

use crate::data::{self, section_id};

use super::icons;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={section_id::CONTACT} class="contact-section">
            <div class="contact-heading">
                { icons::contact_icon(data::ContactKind::Email, "contact-heading-icon") }
                <h2>{data::CONTACT_HEADER}</h2>
            </div>
            <dl class="contact-list">
                { for data::CONTACT_ENTRIES.iter().map(|entry| html! {
                    <div class="contact-entry" key={entry.kind.label()}>
                        <dt class="sr-only">{entry.kind.label()}</dt>
                        <dd>
                            <a
                                class="contact-link"
                                href={entry.href}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                { icons::contact_icon(entry.kind, "contact-icon") }
                                <span>{entry.text}</span>
                            </a>
                        </dd>
                    </div>
                }) }
            </dl>
        </section>
    }
}
