use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use futures_util::StreamExt;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::{sync::RwLock, time::Instant};
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

const DEFAULT_STATS_CACHE_TTL_SECONDS: u64 = 300;
const DEFAULT_STATS_CACHE_MAX_ENTRIES: usize = 16;
const DEFAULT_STATS_RESPONSE_MAX_BYTES: usize = 512 * 1024;
const DEFAULT_STATS_REQUEST_TIMEOUT_MS: u64 = 6_000;
const DEFAULT_STATS_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_TOP_REPOSITORY_LIMIT: usize = 6;
const DEFAULT_GITHUB_USERNAME: &str = "cgibsonp";
const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATS_CACHE_TTL_SECONDS_BOUNDS: (u64, u64) = (1, 86_400);
const STATS_CACHE_MAX_ENTRIES_BOUNDS: (usize, usize) = (1, 1_000);
const STATS_RESPONSE_MAX_BYTES_BOUNDS: (usize, usize) = (1_024, 10 * 1024 * 1024);
const STATS_REQUEST_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 120_000);
const STATS_CONNECT_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 30_000);
const TOP_REPOSITORY_LIMIT_BOUNDS: (usize, usize) = (1, 12);
const REPOSITORY_FETCH_PAGE_SIZE: usize = 100;
const USER_AGENT: &str = "portfolio-stats-bot/1.0";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct StatsRuntimeConfig {
    cache_ttl_seconds: u64,
    cache_max_entries: usize,
    response_max_bytes: usize,
    request_timeout: Duration,
    connect_timeout: Duration,
    top_repository_limit: usize,
    github_username: String,
    github_api_base: Option<Url>,
    log_level: LogLevel,
}

impl StatsRuntimeConfig {
    fn from_env() -> Self {
        let cache_ttl_seconds = parse_env_u64_with_bounds(
            "STATS_CACHE_TTL_SECONDS",
            DEFAULT_STATS_CACHE_TTL_SECONDS,
            STATS_CACHE_TTL_SECONDS_BOUNDS,
        );
        let cache_max_entries = parse_env_usize_with_bounds(
            "STATS_CACHE_MAX_ENTRIES",
            DEFAULT_STATS_CACHE_MAX_ENTRIES,
            STATS_CACHE_MAX_ENTRIES_BOUNDS,
        );
        let response_max_bytes = parse_env_usize_with_bounds(
            "STATS_RESPONSE_MAX_BYTES",
            DEFAULT_STATS_RESPONSE_MAX_BYTES,
            STATS_RESPONSE_MAX_BYTES_BOUNDS,
        );
        let request_timeout_ms = parse_env_u64_with_bounds(
            "STATS_REQUEST_TIMEOUT_MS",
            DEFAULT_STATS_REQUEST_TIMEOUT_MS,
            STATS_REQUEST_TIMEOUT_MS_BOUNDS,
        );
        let connect_timeout_ms = parse_env_u64_with_bounds(
            "STATS_CONNECT_TIMEOUT_MS",
            DEFAULT_STATS_CONNECT_TIMEOUT_MS,
            STATS_CONNECT_TIMEOUT_MS_BOUNDS,
        );
        let top_repository_limit = parse_env_usize_with_bounds(
            "STATS_TOP_REPOSITORY_LIMIT",
            DEFAULT_TOP_REPOSITORY_LIMIT,
            TOP_REPOSITORY_LIMIT_BOUNDS,
        );
        let github_username = parse_env_non_empty_string("GITHUB_USERNAME")
            .unwrap_or_else(|| DEFAULT_GITHUB_USERNAME.to_string());
        let github_api_base = parse_env_http_url("GITHUB_API_BASE")
            .or_else(|| Url::parse(DEFAULT_GITHUB_API_BASE).ok());
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            cache_ttl_seconds,
            cache_max_entries,
            response_max_bytes,
            request_timeout: Duration::from_millis(request_timeout_ms),
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            top_repository_limit,
            github_username,
            github_api_base,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    cache: Arc<RwLock<HashMap<String, CacheEntry>>>,
    config: StatsRuntimeConfig,
}

#[derive(Clone)]
struct CacheEntry {
    created_at: Instant,
    expires_at: Instant,
    value: StatsPayload,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RepositorySummary {
    name: String,
    stars: u64,
    forks: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    url: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsPayload {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    repositories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    followers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    member_since: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_repositories: Option<Vec<RepositorySummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StatsPayload {
    fn error(message: &str) -> Self {
        Self {
            ok: false,
            repositories: None,
            followers: None,
            member_since: None,
            top_repositories: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct GithubUserDocument {
    public_repos: u32,
    followers: u32,
    created_at: String,
}

#[derive(Deserialize)]
struct GithubRepoDocument {
    name: String,
    stargazers_count: u64,
    forks_count: u64,
    language: Option<String>,
    html_url: String,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let bind_address = format!("0.0.0.0:{port}");
    let config = StatsRuntimeConfig::from_env();

    log_event(
        &config,
        LogLevel::Info,
        "server_starting",
        serde_json::json!({
            "port": port,
            "github_user": config.github_username.as_str(),
        }),
    );

    let state = AppState {
        cache: Arc::new(RwLock::new(HashMap::new())),
        config,
    };

    let static_service = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));

    let app = Router::new()
        .route("/api/github", get(get_github_stats))
        .fallback_service(static_service)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_github_stats(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);
    let username = state.config.github_username.clone();

    log_event(
        &state.config,
        LogLevel::Info,
        "stats_request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
            "github_user": username.as_str(),
        }),
    );

    let cache_hit = read_from_cache(&state, &username).await;
    log_event(
        &state.config,
        LogLevel::Debug,
        "stats_cache_decision",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "github_user": username.as_str(),
            "memory_cache": if cache_hit.is_some() { "hit" } else { "miss" },
        }),
    );

    if let Some(payload) = cache_hit {
        log_event(
            &state.config,
            LogLevel::Info,
            "stats_request_complete",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "status": StatusCode::OK.as_u16(),
                "duration_ms": request_started_at.elapsed().as_millis(),
                "cache": "memory_hit",
            }),
        );
        return json_response(
            StatusCode::OK,
            payload,
            cache_control(&format!("public, max-age={}", state.config.cache_ttl_seconds)),
            &request_id,
        );
    }

    match fetch_stats_payload(&state.config).await {
        Ok(payload) => {
            write_to_cache(&state, username, payload.clone()).await;
            log_event(
                &state.config,
                LogLevel::Info,
                "stats_request_complete",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "status": StatusCode::OK.as_u16(),
                    "duration_ms": request_started_at.elapsed().as_millis(),
                    "cache": "memory_miss",
                }),
            );
            json_response(
                StatusCode::OK,
                payload,
                cache_control(&format!("public, max-age={}", state.config.cache_ttl_seconds)),
                &request_id,
            )
        }
        Err(error_message) => {
            log_event(
                &state.config,
                LogLevel::Info,
                "stats_fetch_failed_recoverable",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "github_user": state.config.github_username.as_str(),
                    "error_class": "upstream_fetch_failed",
                    "message": error_message,
                    "duration_ms": request_started_at.elapsed().as_millis(),
                }),
            );
            json_response(
                StatusCode::OK,
                StatsPayload::error(error_message),
                cache_control("no-store"),
                &request_id,
            )
        }
    }
}

fn json_response(
    status: StatusCode,
    payload: StatsPayload,
    cache_control: HeaderValue,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control);
    headers.insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    (status, headers, Json(payload)).into_response()
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_usize_with_bounds(name: &str, default: usize, bounds: (usize, usize)) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_http_url(name: &str) -> Option<Url> {
    let value = parse_env_non_empty_string(name)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(config: &StatsRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

async fn read_from_cache(state: &AppState, key: &str) -> Option<StatsPayload> {
    let now = Instant::now();
    {
        let cache = state.cache.read().await;
        let entry = cache.get(key)?;

        if entry.expires_at > now {
            return Some(entry.value.clone());
        }
    }

    let mut cache = state.cache.write().await;
    purge_expired_entries(&mut cache, now);
    cache.remove(key);
    None
}

async fn write_to_cache(state: &AppState, key: String, value: StatsPayload) {
    let now = Instant::now();
    let mut cache = state.cache.write().await;

    purge_expired_entries(&mut cache, now);

    if !cache.contains_key(&key) && cache.len() >= state.config.cache_max_entries {
        evict_oldest_entry(&mut cache);
    }

    cache.insert(
        key,
        CacheEntry {
            created_at: now,
            expires_at: now + Duration::from_secs(state.config.cache_ttl_seconds),
            value,
        },
    );
}

fn purge_expired_entries(cache: &mut HashMap<String, CacheEntry>, now: Instant) {
    cache.retain(|_, entry| entry.expires_at > now);
}

fn evict_oldest_entry(cache: &mut HashMap<String, CacheEntry>) {
    let Some(key_to_remove) = cache
        .iter()
        .min_by_key(|(_, entry)| entry.created_at)
        .map(|(key, _)| key.clone())
    else {
        return;
    };

    cache.remove(&key_to_remove);
}

async fn fetch_stats_payload(config: &StatsRuntimeConfig) -> Result<StatsPayload, &'static str> {
    let base = config
        .github_api_base
        .as_ref()
        .ok_or("statistics API base is not configured")?;
    let user_url = base
        .join(&format!("users/{}", config.github_username))
        .map_err(|_| "failed to build user endpoint")?;
    let mut repos_url = base
        .join(&format!("users/{}/repos", config.github_username))
        .map_err(|_| "failed to build repositories endpoint")?;
    repos_url.set_query(Some(&format!("per_page={REPOSITORY_FETCH_PAGE_SIZE}")));

    let client = build_stats_client(config)?;
    let user_document: GithubUserDocument = fetch_json_document(&client, user_url, config).await?;
    let repo_documents: Vec<GithubRepoDocument> =
        fetch_json_document(&client, repos_url, config).await?;

    Ok(build_stats_payload(
        &user_document,
        repo_documents,
        config.top_repository_limit,
    ))
}

fn build_stats_client(config: &StatsRuntimeConfig) -> Result<reqwest::Client, &'static str> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|_| "failed to prepare request client")
}

async fn fetch_json_document<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: Url,
    config: &StatsRuntimeConfig,
) -> Result<T, &'static str> {
    let response = client
        .get(url)
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(|_| "failed to reach statistics service")?;

    if !response.status().is_success() {
        return Err("received non-success response");
    }

    let body = read_limited_body(response, config.response_max_bytes).await?;
    serde_json::from_str(&body).map_err(|_| "received malformed statistics document")
}

async fn read_limited_body(
    response: reqwest::Response,
    max_response_bytes: usize,
) -> Result<String, &'static str> {
    let mut stream = response.bytes_stream();
    let mut body: Vec<u8> = Vec::with_capacity(8192);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|_| "failed reading response body")?;

        if body.len() + chunk.len() > max_response_bytes {
            return Err("response body too large");
        }

        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).to_string())
}

fn build_stats_payload(
    user: &GithubUserDocument,
    mut repositories: Vec<GithubRepoDocument>,
    limit: usize,
) -> StatsPayload {
    // The repositories endpoint has no server-side star ordering, so rank
    // the fetched page here before truncating.
    repositories.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    let top_repositories = repositories
        .into_iter()
        .take(limit)
        .map(|repository| RepositorySummary {
            name: repository.name,
            stars: repository.stargazers_count,
            forks: repository.forks_count,
            language: repository.language,
            url: repository.html_url,
        })
        .collect();

    StatsPayload {
        ok: true,
        repositories: Some(user.public_repos),
        followers: Some(user.followers),
        member_since: account_creation_year(&user.created_at),
        top_repositories: Some(top_repositories),
        error: None,
    }
}

fn account_creation_year(created_at: &str) -> Option<u16> {
    created_at.get(..4)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_runtime_config() -> StatsRuntimeConfig {
        StatsRuntimeConfig {
            cache_ttl_seconds: DEFAULT_STATS_CACHE_TTL_SECONDS,
            cache_max_entries: DEFAULT_STATS_CACHE_MAX_ENTRIES,
            response_max_bytes: DEFAULT_STATS_RESPONSE_MAX_BYTES,
            request_timeout: Duration::from_millis(DEFAULT_STATS_REQUEST_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_STATS_CONNECT_TIMEOUT_MS),
            top_repository_limit: DEFAULT_TOP_REPOSITORY_LIMIT,
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            github_api_base: Url::parse(DEFAULT_GITHUB_API_BASE).ok(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn test_state() -> AppState {
        AppState {
            cache: Arc::new(RwLock::new(HashMap::new())),
            config: test_runtime_config(),
        }
    }

    fn stats_payload_titled(title: &str) -> StatsPayload {
        StatsPayload {
            ok: true,
            repositories: Some(1),
            followers: Some(2),
            member_since: Some(2015),
            top_repositories: Some(vec![RepositorySummary {
                name: title.to_string(),
                stars: 3,
                forks: 1,
                language: Some("Rust".to_string()),
                url: format!("https://github.com/{DEFAULT_GITHUB_USERNAME}/{title}"),
            }]),
            error: None,
        }
    }

    fn repo_document(name: &str, stars: u64) -> GithubRepoDocument {
        GithubRepoDocument {
            name: name.to_string(),
            stargazers_count: stars,
            forks_count: stars / 2,
            language: Some("Swift".to_string()),
            html_url: format!("https://github.com/{DEFAULT_GITHUB_USERNAME}/{name}"),
        }
    }

    #[tokio::test]
    async fn cache_returns_fresh_entry() {
        let state = test_state();
        write_to_cache(&state, "cgibsonp".to_string(), stats_payload_titled("fresh")).await;

        let hit = read_from_cache(&state, "cgibsonp").await;
        assert!(hit.is_some());
    }

    #[tokio::test]
    async fn expired_cache_entry_is_removed_on_read() {
        let state = test_state();
        let now = Instant::now();

        {
            let mut cache = state.cache.write().await;
            cache.insert(
                "cgibsonp".to_string(),
                CacheEntry {
                    created_at: now,
                    expires_at: now,
                    value: stats_payload_titled("stale"),
                },
            );
        }

        assert!(read_from_cache(&state, "cgibsonp").await.is_none());

        let cache = state.cache.read().await;
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn cache_overwrite_at_capacity_does_not_evict_oldest() {
        let state = test_state();
        let now = Instant::now();

        {
            let mut cache = state.cache.write().await;

            for index in 0..DEFAULT_STATS_CACHE_MAX_ENTRIES {
                let key = format!("key-{index}");
                cache.insert(
                    key,
                    CacheEntry {
                        created_at: now + Duration::from_secs(index as u64),
                        expires_at: now + Duration::from_secs(10_000),
                        value: stats_payload_titled("seed"),
                    },
                );
            }
        }

        write_to_cache(&state, "key-10".to_string(), stats_payload_titled("updated")).await;

        let cache = state.cache.read().await;
        assert_eq!(cache.len(), DEFAULT_STATS_CACHE_MAX_ENTRIES);
        assert!(cache.contains_key("key-0"));

        let updated_name = cache.get("key-10").and_then(|entry| {
            entry
                .value
                .top_repositories
                .as_ref()
                .and_then(|repositories| repositories.first())
                .map(|repository| repository.name.clone())
        });
        assert_eq!(updated_name.as_deref(), Some("updated"));
    }

    #[tokio::test]
    async fn inserting_a_new_key_at_capacity_evicts_the_oldest() {
        let state = test_state();
        let now = Instant::now();

        {
            let mut cache = state.cache.write().await;

            for index in 0..DEFAULT_STATS_CACHE_MAX_ENTRIES {
                let key = format!("key-{index}");
                cache.insert(
                    key,
                    CacheEntry {
                        created_at: now + Duration::from_secs(index as u64),
                        expires_at: now + Duration::from_secs(10_000),
                        value: stats_payload_titled("seed"),
                    },
                );
            }
        }

        write_to_cache(&state, "brand-new".to_string(), stats_payload_titled("new")).await;

        let cache = state.cache.read().await;
        assert_eq!(cache.len(), DEFAULT_STATS_CACHE_MAX_ENTRIES);
        assert!(!cache.contains_key("key-0"));
        assert!(cache.contains_key("brand-new"));
    }

    #[test]
    fn stats_payload_ranks_repositories_by_stars_and_truncates() {
        let user = GithubUserDocument {
            public_repos: 12,
            followers: 34,
            created_at: "2015-06-01T00:00:00Z".to_string(),
        };
        let repositories = vec![
            repo_document("quiet", 1),
            repo_document("popular", 40),
            repo_document("middling", 7),
        ];

        let payload = build_stats_payload(&user, repositories, 2);
        assert!(payload.ok);
        assert_eq!(payload.repositories, Some(12));
        assert_eq!(payload.followers, Some(34));
        assert_eq!(payload.member_since, Some(2015));

        let names: Vec<String> = payload
            .top_repositories
            .expect("ranked repositories")
            .into_iter()
            .map(|repository| repository.name)
            .collect();
        assert_eq!(names, vec!["popular".to_string(), "middling".to_string()]);
    }

    #[test]
    fn account_creation_year_reads_the_leading_year() {
        assert_eq!(account_creation_year("2015-06-01T00:00:00Z"), Some(2015));
        assert_eq!(account_creation_year("bad"), None);
        assert_eq!(account_creation_year(""), None);
    }

    #[test]
    fn degraded_payload_reports_the_failure() {
        let payload = StatsPayload::error("received non-success response");
        assert!(!payload.ok);
        assert_eq!(payload.error.as_deref(), Some("received non-success response"));
        assert!(payload.repositories.is_none());
        assert!(payload.top_repositories.is_none());
    }

    #[test]
    fn request_id_prefers_the_caller_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-caller-7"));
        assert_eq!(resolve_request_id(&headers), "req-caller-7");
    }

    #[test]
    fn request_id_is_generated_when_absent_or_blank() {
        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(resolve_request_id(&headers).starts_with("req-"));
    }

    #[test]
    fn stats_endpoints_derive_from_the_configured_base() {
        let config = test_runtime_config();
        let base = config.github_api_base.expect("default base");

        let user_url = base
            .join(&format!("users/{}", config.github_username))
            .expect("user endpoint");
        assert_eq!(user_url.as_str(), "https://api.github.com/users/cgibsonp");

        let mut repos_url = base
            .join(&format!("users/{}/repos", config.github_username))
            .expect("repositories endpoint");
        repos_url.set_query(Some(&format!("per_page={REPOSITORY_FETCH_PAGE_SIZE}")));
        assert_eq!(
            repos_url.as_str(),
            "https://api.github.com/users/cgibsonp/repos?per_page=100"
        );
    }
}
