//! Motivational quotes.
//!
//! A [`QuoteProvider`] fetches one quote per call. [`QuoteRefresher`] runs
//! fetches on the async runtime and publishes successes to a [`QuoteBoard`],
//! which the UI polls. A failed fetch is logged and leaves the board as it was.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::error::QuoteError;

pub const DEFAULT_QUOTES_URL: &str = "https://api.quotable.io/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of quote text, rendered as `"<content> - <author>"`.
pub trait QuoteProvider: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<String, QuoteError>> + Send;
}

#[derive(Debug, Deserialize)]
struct Quote {
    content: String,
    author: String,
}

/// The random endpoint answers with a list; single objects are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuoteBody {
    One(Quote),
    Many(Vec<Quote>),
}

/// Client for the quotable.io API.
#[derive(Debug, Clone)]
pub struct QuotableClient {
    client: Client,
    endpoint: Url,
}

impl QuotableClient {
    /// `base` is the service root, e.g. `https://api.quotable.io/`.
    pub fn new(base: &Url) -> Result<Self, QuoteError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let mut endpoint = base.join("quotes/random")?;
        endpoint
            .query_pairs_mut()
            .append_pair("tags", "motivational");
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl QuoteProvider for QuotableClient {
    async fn fetch(&self) -> Result<String, QuoteError> {
        let resp = self.client.get(self.endpoint.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(QuoteError::Status(resp.status()));
        }

        let quote = match resp.json::<QuoteBody>().await? {
            QuoteBody::One(quote) => quote,
            QuoteBody::Many(quotes) => quotes.into_iter().next().ok_or(QuoteError::Empty)?,
        };
        Ok(format!("{} - {}", quote.content, quote.author))
    }
}

/// Latest quote text, shared with the UI. Empty until the first success.
#[derive(Debug, Clone, Default)]
pub struct QuoteBoard(Arc<Mutex<String>>);

impl QuoteBoard {
    pub fn text(&self) -> String {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, text: String) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = text;
    }
}

/// Fetches quotes in the background and posts them to a board.
#[derive(Debug)]
pub struct QuoteRefresher<P> {
    provider: Arc<P>,
    board: QuoteBoard,
}

impl<P> Clone for QuoteRefresher<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            board: self.board.clone(),
        }
    }
}

impl<P: QuoteProvider> QuoteRefresher<P> {
    pub fn new(provider: P, board: QuoteBoard) -> Self {
        Self {
            provider: Arc::new(provider),
            board,
        }
    }

    /// Start a fetch on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn refresh(&self) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let board = self.board.clone();
        tokio::spawn(async move {
            match provider.fetch().await {
                Ok(text) => {
                    debug!(quote = %text, "quote refreshed");
                    board.set(text);
                }
                Err(e) => warn!(error = %e, "quote fetch failed, keeping previous quote"),
            }
        })
    }
}
