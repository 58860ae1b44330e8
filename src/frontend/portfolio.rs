use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::data::{self, section_id, PortfolioItem};
use crate::interaction::{ClickAction, DeviceClass, ItemController, ModalLifecycle};

use super::dom;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let modal = use_state(ModalLifecycle::closed);

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |item: PortfolioItem| {
            let mut next = (*modal).clone();
            if next.request_open(item) {
                modal.set(next);
            }
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut next = (*modal).clone();
            next.close();
            modal.set(next);
        })
    };

    let preview_loaded = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut next = (*modal).clone();
            next.preview_loaded();
            modal.set(next);
        })
    };

    // Background scroll is suspended exactly while the modal is open; the
    // guard releases on close and on unmount alike.
    {
        use_effect_with(modal.scroll_locked(), |locked| {
            let lock = locked.then(dom::ScrollLock::acquire).flatten();
            move || drop(lock)
        });
    }

    // The cancellation key is observed document-wide only while the modal is
    // open, so repeated open/close cycles never accumulate listeners.
    {
        let close_modal = close_modal.clone();
        use_effect_with(modal.is_open(), move |open| {
            let escape = open
                .then(|| {
                    dom::DocumentListener::on_document("keydown", move |event| {
                        let escape_pressed = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key_event| key_event.key() == "Escape");
                        if escape_pressed {
                            close_modal.emit(());
                        }
                    })
                })
                .flatten();

            move || drop(escape)
        });
    }

    html! {
        <section id={section_id::PORTFOLIO} class="portfolio-section">
            <div class="portfolio-intro">
                <h2>{"Featured Projects"}</h2>
                <p>
                    {"A collection of projects showcasing my passion for technology and innovation. \
                      Click on any project to explore it in detail."}
                </p>
            </div>
            <div class="portfolio-grid">
                { for data::PORTFOLIO_ITEMS.iter().map(|item| html! {
                    <ProjectCard item={*item} key={item.title} on_open_modal={open_modal.clone()} />
                }) }
            </div>
            <div class="portfolio-more">
                <a class="portfolio-support-link" href={data::SUPPORT_PAGE_PATH}>
                    {"View Monday Night Group App"}
                </a>
            </div>
            if let Some(project) = modal.active() {
                <ProjectModal
                    project={*project}
                    preview_loading={modal.preview_loading()}
                    on_close={close_modal}
                    on_preview_loaded={preview_loaded}
                />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    item: PortfolioItem,
    on_open_modal: Callback<PortfolioItem>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let item = props.item;
    let controller = use_state(|| ItemController::new(DeviceClass::Pointer));
    let overlay_ref = use_node_ref();

    // Device class is refined once after mount so the first render matches
    // whatever the host environment would have produced.
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            if dom::touch_primary_device() {
                let mut next = (*controller).clone();
                next.refine_device(DeviceClass::Touch);
                controller.set(next);
            }
            || ()
        });
    }

    // While the overlay is revealed, a pointer-down outside it or the
    // cancellation key returns the card to idle.
    {
        let revealed = controller.revealed();
        let controller = controller.clone();
        let overlay_ref = overlay_ref.clone();
        use_effect_with(revealed, move |revealed| {
            let listeners = revealed.then(|| {
                let dismiss_controller = controller.clone();
                let region_ref = overlay_ref.clone();
                let pointer = dom::DocumentListener::on_document("pointerdown", move |event| {
                    let outside = region_ref
                        .cast::<Element>()
                        .map(|region| dom::pointer_event_is_outside(&event, &region))
                        .unwrap_or(true);
                    if outside {
                        let mut next = (*dismiss_controller).clone();
                        next.dismiss();
                        dismiss_controller.set(next);
                    }
                });

                let escape_controller = controller.clone();
                let keyboard = dom::DocumentListener::on_document("keydown", move |event| {
                    let escape_pressed = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|key_event| key_event.key() == "Escape");
                    if escape_pressed {
                        let mut next = (*escape_controller).clone();
                        next.dismiss();
                        escape_controller.set(next);
                    }
                });

                (pointer, keyboard)
            });

            move || drop(listeners)
        });
    }

    let onclick = {
        let controller = controller.clone();
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let mut next = (*controller).clone();
            match next.on_click(item.url) {
                ClickAction::Reveal => controller.set(next),
                ClickAction::OpenModal => on_open_modal.emit(item),
                ClickAction::Navigate => dom::open_in_new_tab(item.url),
                ClickAction::Ignore => {}
            }
        })
    };

    let overlay_class = classes!(
        "card-overlay",
        (controller.device() == DeviceClass::Touch).then_some("is-touch"),
        controller.revealed().then_some("is-revealed"),
    );
    let call_to_action = if item.has_absolute_url() {
        "Preview Project"
    } else {
        "View Project"
    };

    html! {
        <div class="portfolio-card">
            <img class="portfolio-card-image" alt={item.title} src={item.image} loading="lazy" />
            <div ref={overlay_ref} class={overlay_class} onclick={onclick}>
                <div class="card-overlay-body">
                    <h3>{item.title}</h3>
                    <p>{item.description}</p>
                    <span class="card-overlay-cta">
                        {call_to_action}
                        <span aria-hidden="true">{" ↗"}</span>
                    </span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: PortfolioItem,
    preview_loading: bool,
    on_close: Callback<()>,
    on_preview_loaded: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;
    let modal_ref = use_node_ref();

    // The modal only exists while open, so the outside-click detector is
    // armed for its whole lifetime and disarmed when it unmounts.
    {
        let on_close = props.on_close.clone();
        let modal_ref = modal_ref.clone();
        use_effect_with((), move |_| {
            let listener = dom::DocumentListener::on_document("pointerdown", move |event| {
                let outside = modal_ref
                    .cast::<Element>()
                    .map(|region| dom::pointer_event_is_outside(&event, &region))
                    .unwrap_or(true);
                if outside {
                    on_close.emit(());
                }
            });

            move || drop(listener)
        });
    }

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());
    let on_iframe_load = props.on_preview_loaded.reform(|_: Event| ());

    html! {
        <div class="project-modal-backdrop">
            <div ref={modal_ref} class="project-modal">
                <div class="project-modal-header">
                    <div class="project-modal-titles">
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                    </div>
                    <div class="project-modal-controls">
                        <a
                            class="project-modal-open-site"
                            href={project.url}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Open Site"}
                            <span aria-hidden="true">{" ↗"}</span>
                        </a>
                        <button
                            class="project-modal-close"
                            type="button"
                            aria-label="Close modal"
                            onclick={on_close_click}
                        >
                            <span aria-hidden="true">{"✕"}</span>
                        </button>
                    </div>
                </div>
                <div class="project-modal-content">
                    if props.preview_loading {
                        <div class="project-modal-loading">
                            <div class="spinner" />
                            <p>{"Loading website preview..."}</p>
                        </div>
                    }
                    <iframe
                        class="project-modal-frame"
                        src={project.url}
                        title={format!("Preview of {}", project.title)}
                        sandbox="allow-scripts allow-same-origin allow-forms allow-popups allow-popups-to-escape-sandbox allow-top-navigation"
                        referrerpolicy="no-referrer-when-downgrade"
                        loading="eager"
                        onload={on_iframe_load}
                    />
                </div>
            </div>
        </div>
    }
}
