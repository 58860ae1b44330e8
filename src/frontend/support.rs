use web_sys::MouseEvent;
use yew::prelude::*;

use crate::data;

use super::hero::Socials;

#[derive(Properties, PartialEq)]
struct FaqListProps {
    entries: &'static [data::FaqEntry],
}

#[function_component(FaqList)]
fn faq_list(props: &FaqListProps) -> Html {
    // One entry open at a time; toggling the open entry closes it.
    let open_entry = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = *open_entry == Some(index);
                let ontoggle = {
                    let open_entry = open_entry.clone();
                    Callback::from(move |_: MouseEvent| {
                        open_entry.set(if *open_entry == Some(index) {
                            None
                        } else {
                            Some(index)
                        });
                    })
                };

                html! {
                    <div class="faq-entry" key={entry.question}>
                        <button
                            class="faq-question"
                            type="button"
                            aria-expanded={is_open.to_string()}
                            onclick={ontoggle}
                        >
                            <span>{entry.question}</span>
                            <span class="faq-chevron" aria-hidden="true">
                                { if is_open { "▴" } else { "▾" } }
                            </span>
                        </button>
                        if is_open {
                            <p class="faq-answer">{entry.answer}</p>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(SupportPage)]
pub fn support_page() -> Html {
    html! {
        <div class="support-page">
            <header class="support-header">
                <a class="support-home-link" href="/">{data::SITE_TITLE}</a>
            </header>
            <main class="support-main">
                <section class="support-intro">
                    <h1>{data::SUPPORT.app_name}</h1>
                    <h2>{data::SUPPORT.developer}</h2>
                </section>

                <section class="support-card">
                    <h3>{"Support Contact"}</h3>
                    <p>{"For support, please contact us at:"}</p>
                    <a href={format!("mailto:{}", data::SUPPORT.support_email)}>
                        {data::SUPPORT.support_email}
                    </a>
                    <p>{"Address:"}</p>
                    <p>{data::SUPPORT.support_address}</p>
                </section>

                <section class="support-card">
                    <h3>{"FAQs or Troubleshooting Guide"}</h3>
                    <FaqList entries={data::FAQ_ENTRIES} />
                </section>

                <section class="support-card">
                    <h3>{"Privacy Policy"}</h3>
                    <p>{"We value your privacy. This app collects the following data:"}</p>
                    <ul>
                        { for data::SUPPORT.data_collection_notes.iter().map(|note| html! {
                            <li key={*note}>{*note}</li>
                        }) }
                    </ul>
                    <p>
                        {"For more details, please read our full "}
                        <a
                            href={data::SUPPORT.privacy_policy_url}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Privacy Policy"}
                        </a>
                        {"."}
                    </p>
                </section>

                <section class="support-card">
                    <h3>{"App Store Link (TBD)"}</h3>
                    <p>{"Download on the App Store"}</p>
                </section>
            </main>
            <footer class="support-footer">
                <Socials />
            </footer>
        </div>
    }
}
