use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::data;

use super::icons;

const TOP_REPOSITORIES_SHOWN: usize = 3;

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositorySummary {
    name: String,
    stars: u64,
    forks: u64,
    language: Option<String>,
    url: String,
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsResponse {
    ok: bool,
    repositories: Option<u32>,
    followers: Option<u32>,
    member_since: Option<u16>,
    top_repositories: Option<Vec<RepositorySummary>>,
}

#[derive(Clone, PartialEq)]
enum PanelState {
    Loading,
    Loaded(StatsResponse),
    Unavailable,
}

async fn fetch_stats() -> Option<StatsResponse> {
    let response = Request::get("/api/github").send().await.ok()?;
    let payload = response.json::<StatsResponse>().await.ok()?;

    if !payload.ok {
        return None;
    }

    Some(payload)
}

#[function_component(GithubActivity)]
pub fn github_activity() -> Html {
    let panel = use_state(|| PanelState::Loading);

    {
        let panel = panel.clone();
        use_effect_with((), move |_| {
            // A response arriving after unmount is discarded rather than
            // written into dropped state.
            let alive = Rc::new(Cell::new(true));
            let alive_for_task = alive.clone();

            spawn_local(async move {
                let fetched = fetch_stats().await;
                if !alive_for_task.get() {
                    return;
                }

                panel.set(match fetched {
                    Some(stats) => PanelState::Loaded(stats),
                    None => PanelState::Unavailable,
                });
            });

            move || alive.set(false)
        });
    }

    match &*panel {
        PanelState::Loading => html! {
            <div class="github-panel is-loading" aria-hidden="true">
                <div class="github-skeleton-row" />
                <div class="github-skeleton-grid">
                    <div class="github-skeleton-cell" />
                    <div class="github-skeleton-cell" />
                    <div class="github-skeleton-cell" />
                </div>
                <div class="github-skeleton-row" />
                <div class="github-skeleton-row" />
            </div>
        },
        PanelState::Unavailable => Html::default(),
        PanelState::Loaded(stats) => render_stats(stats),
    }
}

fn render_stats(stats: &StatsResponse) -> Html {
    let top_repositories = stats
        .top_repositories
        .as_deref()
        .unwrap_or_default()
        .iter()
        .take(TOP_REPOSITORIES_SHOWN)
        .map(render_repository)
        .collect::<Html>();

    html! {
        <div class="github-panel">
            <div class="github-heading">
                { icons::github("github-mark") }
                <h3>{"GitHub Activity"}</h3>
            </div>
            <div class="github-stats-grid">
                { stat_cell(stats.repositories.map(|count| count.to_string()), "Repositories") }
                { stat_cell(stats.followers.map(|count| count.to_string()), "Followers") }
                { stat_cell(stats.member_since.map(|year| year.to_string()), "Member Since") }
            </div>
            <div class="github-repositories">
                <h4>{"Popular Repositories"}</h4>
                { top_repositories }
            </div>
            <div class="github-profile-link">
                <a
                    href={format!("https://github.com/{}", data::GITHUB_USERNAME)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"View Full Profile"}
                    <span aria-hidden="true">{" →"}</span>
                </a>
            </div>
        </div>
    }
}

fn stat_cell(value: Option<String>, label: &'static str) -> Html {
    let Some(value) = value else {
        return Html::default();
    };

    html! {
        <div class="github-stat">
            <div class="github-stat-value">{value}</div>
            <div class="github-stat-label">{label}</div>
        </div>
    }
}

fn render_repository(repository: &RepositorySummary) -> Html {
    html! {
        <a
            class="github-repository"
            key={repository.name.clone()}
            href={repository.url.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            <span class="github-repository-name">{repository.name.clone()}</span>
            <span class="github-repository-meta">
                if let Some(language) = repository.language.as_ref() {
                    <span class="github-repository-language">{language.clone()}</span>
                }
                <span>{format!("⭐ {}", repository.stars)}</span>
                <span>{format!("🍴 {}", repository.forks)}</span>
            </span>
        </a>
    }
}
