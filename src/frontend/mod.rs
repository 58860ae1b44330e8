mod about;
mod contact;
mod dom;
mod github;
mod hero;
mod icons;
mod portfolio;
mod resume;
mod support;

use web_sys::window;
use yew::prelude::*;

use crate::data;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Route {
    Home,
    Support,
}

fn resolve_route() -> Route {
    let path = dom::current_pathname();
    if path
        .trim_end_matches('/')
        .eq_ignore_ascii_case(data::SUPPORT_PAGE_PATH)
    {
        Route::Support
    } else {
        Route::Home
    }
}

#[function_component(App)]
fn app() -> Html {
    // The server answers every path with index.html, so the route is fixed
    // for the lifetime of the mount; navigation is a full page load.
    match resolve_route() {
        Route::Support => html! { <support::SupportPage /> },
        Route::Home => html! {
            <>
                <hero::Hero />
                <about::About />
                <resume::Resume />
                <portfolio::Portfolio />
                <contact::Contact />
            </>
        },
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
