use crate::config::WatchConfig;
use crate::domain::leaderboard::{
    decode_snapshot, encode_request, LeaderboardError, LeaderboardRequest, Snapshot,
};
use crate::global::get_global_scope;
use crate::ports::SnapshotSourcePort;
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response, WorkerGlobalScope};

/// Fetches the leaderboard from the ranking service with `fetch`.
///
/// Requests carry the page cookies, the service authenticates by session.
pub struct HttpSnapshotSource {
    endpoint: String,
    request: LeaderboardRequest,
}

impl HttpSnapshotSource {
    pub fn new(endpoint: impl Into<String>, request: LeaderboardRequest) -> Self {
        Self {
            endpoint: endpoint.into(),
            request,
        }
    }

    pub fn from_config(config: &WatchConfig) -> Result<Self, LeaderboardError> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| LeaderboardError::invalid_config("endpoint is required"))?;
        Ok(Self::new(endpoint, config.leaderboard_request()))
    }

    fn build_request(&self) -> Result<Request, LeaderboardError> {
        let body = encode_request(&self.request)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));
        init.set_credentials(RequestCredentials::Include);

        let request = Request::new_with_str_and_init(&self.endpoint, &init)?;
        request.headers().set("Content-Type", "application/json")?;
        Ok(request)
    }
}

#[async_trait(?Send)]
impl SnapshotSourcePort for HttpSnapshotSource {
    async fn fetch(&self) -> Result<Snapshot, LeaderboardError> {
        let request = self.build_request()?;
        let scope = get_global_scope()?;

        let promise = if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            worker.fetch_with_request(&request)
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            window.fetch_with_request(&request)
        } else {
            return Err(LeaderboardError::source_unavailable(
                "Could not access fetch",
            ));
        };

        let response: Response = JsFuture::from(promise).await?.dyn_into()?;
        if !response.ok() {
            return Err(LeaderboardError::source_unavailable(format!(
                "Leaderboard request failed with status {}",
                response.status()
            )));
        }

        let text = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .ok_or_else(|| LeaderboardError::decode("Leaderboard response is not text"))?;

        decode_snapshot(&text, &self.request.rating_field_name)
    }
}
