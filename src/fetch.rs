use crate::api::{FetchError, Gateway};
use crate::modal::ModalId;
use crate::model::{ResortDetail, ResortSummary};
use tokio::sync::mpsc::UnboundedSender;

/// Where a response should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Modal(ModalId),
    /// The inline top-N list filled at startup.
    TopList,
}

/// Which API call to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Search(String),
    ListAll,
}

/// A request issued by the view, tagged with the token of its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub target: Target,
    pub token: u64,
    pub query: Query,
}

#[derive(Debug)]
pub enum Payload {
    Detail(ResortDetail),
    Summaries(Vec<ResortSummary>),
}

/// Sent from a fetch task back to the event loop.
#[derive(Debug)]
pub struct FetchResponse {
    pub target: Target,
    pub token: u64,
    pub outcome: Result<Payload, FetchError>,
}

/// Run one request to completion. Failures are logged here and carried
/// back in the response; nothing is raised.
pub async fn execute(gateway: &Gateway, request: FetchRequest) -> FetchResponse {
    let outcome = match &request.query {
        Query::Search(name) => gateway.search_by_name(name).await.map(Payload::Detail),
        Query::ListAll => gateway.list_all().await.map(Payload::Summaries),
    };

    if let Err(e) = &outcome {
        tracing::error!(
            kind = e.kind(),
            target = ?request.target,
            token = request.token,
            error = %e,
            "fetch failed"
        );
    }

    FetchResponse {
        target: request.target,
        token: request.token,
        outcome,
    }
}

/// Run `request` on a background task and deliver the response to `tx`.
pub fn spawn(gateway: Gateway, request: FetchRequest, tx: UnboundedSender<FetchResponse>) {
    tokio::spawn(async move {
        let response = execute(&gateway, request).await;
        if tx.send(response).is_err() {
            tracing::debug!("event loop gone; dropping response");
        }
    });
}
