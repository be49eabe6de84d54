//! HTTP client for the expense-splitting backend.
//!
//! Thin `reqwest` wrapper around the REST endpoints. The one policy it
//! owns: 404 on a list endpoint means "nothing there yet" and comes back
//! as an empty `Vec`, not an error.

use api_types::{
    activity::Activity,
    expense::{ExpenseNew, ExpenseRecord, ExpenseUpdate},
    friend::{FriendSummary, FriendsAdd},
    group::GroupSummary,
    settle::SettleUp,
    summary::DebtSummaryEntry,
};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

pub use error::ClientError;
pub use refresh::{Refresh, Ticket};

mod error;
pub mod refresh;

use error::ErrorResponse;

type ResultClient<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> ResultClient<Self> {
        let base_url =
            Url::parse(base_url).map_err(|err| ClientError::BaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> ResultClient<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::BaseUrl(err.to_string()))
    }

    /// `POST /expenses`
    pub async fn expense_create(&self, payload: &ExpenseNew) -> ResultClient<ExpenseRecord> {
        let endpoint = self.endpoint("expenses")?;
        tracing::debug!(amount = payload.amount, "creating expense");
        let res = self.http.post(endpoint).json(payload).send().await?;
        json_or_error(res).await
    }

    /// `PUT /expenses/{id}`
    pub async fn expense_update(
        &self,
        expense_id: i64,
        payload: &ExpenseUpdate,
    ) -> ResultClient<ExpenseRecord> {
        let endpoint = self.endpoint(&format!("expenses/{expense_id}"))?;
        tracing::debug!(expense_id, "updating expense");
        let res = self.http.put(endpoint).json(payload).send().await?;
        json_or_error(res).await
    }

    /// `GET /api/friends/{user_id}` — 404 means no friends yet.
    pub async fn friends(&self, user_id: i64) -> ResultClient<Vec<FriendSummary>> {
        self.list(&format!("api/friends/{user_id}")).await
    }

    /// `GET /api/groups/{user_id}` — 404 means no groups yet.
    pub async fn groups(&self, user_id: i64) -> ResultClient<Vec<GroupSummary>> {
        self.list(&format!("api/groups/{user_id}")).await
    }

    /// `GET /expense-summary/{user_id}` — 404 means no shared expenses yet.
    pub async fn expense_summary(&self, user_id: i64) -> ResultClient<Vec<DebtSummaryEntry>> {
        self.list(&format!("expense-summary/{user_id}")).await
    }

    /// `GET /users/{user_id}/activities` — 404 means an empty feed.
    pub async fn activities(&self, user_id: i64) -> ResultClient<Vec<Activity>> {
        self.list(&format!("users/{user_id}/activities")).await
    }

    /// `POST /settle-up`
    pub async fn settle_up(&self, payload: &SettleUp) -> ResultClient<()> {
        let endpoint = self.endpoint("settle-up")?;
        tracing::debug!(
            creditor_id = payload.creditor_id,
            debtor_id = payload.debtor_id,
            "settling up"
        );
        let res = self.http.post(endpoint).json(payload).send().await?;
        unit_or_error(res).await
    }

    /// `POST /users/{user_id}/friends`
    pub async fn add_friends(&self, user_id: i64, friend_ids: Vec<i64>) -> ResultClient<()> {
        let endpoint = self.endpoint(&format!("users/{user_id}/friends"))?;
        let payload = FriendsAdd { friend_ids };
        let res = self.http.post(endpoint).json(&payload).send().await?;
        unit_or_error(res).await
    }

    async fn list<T: DeserializeOwned>(&self, path: &str) -> ResultClient<Vec<T>> {
        let endpoint = self.endpoint(path)?;
        let res = self.http.get(endpoint).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        json_or_error(res).await
    }
}

async fn json_or_error<T: DeserializeOwned>(res: Response) -> ResultClient<T> {
    if res.status().is_success() {
        return res.json::<T>().await.map_err(ClientError::Transport);
    }
    Err(status_error(res).await)
}

async fn unit_or_error(res: Response) -> ResultClient<()> {
    if res.status().is_success() {
        return Ok(());
    }
    Err(status_error(res).await)
}

async fn status_error(res: Response) -> ClientError {
    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    match status.as_u16() {
        401 => ClientError::Unauthorized,
        403 => ClientError::Forbidden,
        404 => ClientError::NotFound,
        409 => ClientError::Conflict(body),
        422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    }
}
