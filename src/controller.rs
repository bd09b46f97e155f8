//! Interaction controller.
//!
//! Connects a submission (search box, prompt line or the startup self
//! lookup) to the validate → fetch → render pipeline and owns the page it
//! renders into.
//!
//! Submissions may overlap. Each one takes a request token when it starts and
//! its result is only rendered if no later submission has started since, so
//! the last submission always wins regardless of response order.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};
use tokio::sync::Mutex;

use crate::error_handling::LocateError;
use crate::geolocation::{GeolocationClient, LocationRecord, Query};
use crate::render::{render_error, render_map, Page, ViewState};
use crate::validate::classify;

/// Runs validation and the fetch for one search term.
///
/// `None` looks up the caller's own IP. Text that is neither an IPv4
/// address nor a domain fails with `LocateError::InvalidInput` without
/// issuing a request.
pub async fn locate(
    client: &GeolocationClient,
    text: Option<&str>,
) -> Result<LocationRecord, LocateError> {
    let query = match text {
        None => Query::SelfLookup,
        Some(text) => classify(text).ok_or_else(|| {
            info!("Rejected search input {:?}", text);
            LocateError::InvalidInput
        })?,
    };
    Ok(client.fetch_location(&query).await?)
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The page was re-rendered and is now in this state
    Rendered(ViewState),
    /// A later submission started first; the result was discarded
    Superseded,
}

#[derive(Debug)]
pub struct Controller {
    client: GeolocationClient,
    page: Mutex<Page>,
    latest: AtomicU64,
}

impl Controller {
    /// Controller with an empty page and hidden details.
    pub fn new(client: GeolocationClient) -> Self {
        Self {
            client,
            page: Mutex::new(Page::new()),
            latest: AtomicU64::new(0),
        }
    }

    /// Looks up the caller's own IP.
    pub async fn startup(&self) -> SubmitOutcome {
        self.run(None).await
    }

    /// Handles a search submission with the current search box text.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        self.run(Some(text)).await
    }

    /// Snapshot of the page.
    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    pub async fn view_state(&self) -> ViewState {
        self.page.lock().await.view_state()
    }

    async fn run(&self, text: Option<&str>) -> SubmitOutcome {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let result = locate(&self.client, text).await;

        let mut page = self.page.lock().await;
        // Checked under the page lock so a newer submission can only render after us
        let latest = self.latest.load(Ordering::SeqCst);
        if token != latest {
            debug!(
                "Discarding result of submission {} (latest is {})",
                token, latest
            );
            return SubmitOutcome::Superseded;
        }

        if let Some(text) = text {
            page.search_text = text.to_string();
        }
        match result {
            Ok(record) => render_map(&mut page, &record),
            Err(e) => render_error(&mut page, &e.user_message()),
        }
        SubmitOutcome::Rendered(page.view_state())
    }
}
