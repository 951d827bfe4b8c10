//! Feed controller

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::{
    load_page,
    query::{page_count, FeedMode, FeedQuery},
    Article, FeedPage, FeedTransport,
};

/// Load state of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Loading,
    /// The current page
    Loaded(FeedPage),
    /// The last request failed, with the message to display
    Errored(String),
}

/// Snapshot of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    /// Current selector and page
    pub query: FeedQuery,
    /// Load state
    pub state: FeedState,
    /// Last known upstream total for the current selector
    pub total_results: Option<u64>,
}

impl FeedView {
    fn new(query: FeedQuery) -> Self {
        Self {
            query,
            state: FeedState::Idle,
            total_results: None,
        }
    }

    /// Checks if there is a next page
    ///
    /// Always false until the total is known.
    pub fn has_next(&self) -> bool {
        match self.total_results {
            Some(total) => u64::from(self.query.page) < page_count(total, self.query.page_size),
            None => false,
        }
    }

    /// Checks if there is a previous page
    pub fn has_prev(&self) -> bool {
        self.query.page > 1
    }

    /// Number of pages, at least 1
    pub fn total_pages(&self) -> u64 {
        self.total_results
            .map(|total| page_count(total, self.query.page_size))
            .unwrap_or(0)
            .max(1)
    }

    /// Returns the "page of total" indicator
    pub fn page_indicator(&self) -> String {
        format!("{} of {}", self.query.page, self.total_pages())
    }

    /// Articles of the loaded page
    pub fn articles(&self) -> &[Article] {
        match &self.state {
            FeedState::Loaded(page) => &page.articles,
            _ => &[],
        }
    }

    /// Checks if a request is in flight
    pub fn is_loading(&self) -> bool {
        self.state == FeedState::Loading
    }
}

/// Result of a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was applied to the view
    Applied,
    /// A later navigation started before the response arrived
    Superseded,
}

/// Mutable state, guarded by the controller mutex
#[derive(Debug)]
struct Nav {
    /// Bumped on every navigation
    generation: u64,
    view: FeedView,
}

#[derive(Debug)]
struct Inner<T> {
    transport: T,
    nav: Mutex<Nav>,
    tx: watch::Sender<FeedView>,
}

/// Drives a paged view over a transport
///
/// Clones share the same view. Only the response of the latest navigation
/// is applied, whatever order the responses come back in.
#[derive(Debug)]
pub struct FeedController<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for FeedController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: FeedTransport> FeedController<T> {
    /// Creates a controller showing `query`, in the idle state
    pub fn new(transport: T, query: FeedQuery) -> Self {
        let view = FeedView::new(query);
        let (tx, _) = watch::channel(view.clone());
        Self {
            inner: Arc::new(Inner {
                transport,
                nav: Mutex::new(Nav { generation: 0, view }),
                tx,
            }),
        }
    }

    /// Returns the transport
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Returns the latest view
    pub fn view(&self) -> FeedView {
        self.inner.tx.borrow().clone()
    }

    /// Subscribes to view changes
    pub fn subscribe(&self) -> watch::Receiver<FeedView> {
        self.inner.tx.subscribe()
    }

    /// Loads the current page
    pub async fn load(&self) -> Outcome {
        self.navigate(|_| true)
            .await
            .unwrap_or(Outcome::Superseded)
    }

    /// Moves to the next page, `None` if there is none
    pub async fn next(&self) -> Option<Outcome> {
        self.navigate(|view| {
            if !view.has_next() {
                return false;
            }
            view.query.page += 1;
            true
        })
        .await
    }

    /// Moves to the previous page, `None` if on the first one
    pub async fn prev(&self) -> Option<Outcome> {
        self.navigate(|view| {
            if !view.has_prev() {
                return false;
            }
            view.query.page -= 1;
            true
        })
        .await
    }

    /// Switches the selector and loads its first page
    pub async fn select(&self, mode: FeedMode) -> Outcome {
        self.navigate(move |view| {
            view.query.mode = mode;
            view.query.page = 1;
            // the old total belongs to the old selector
            view.total_results = None;
            true
        })
        .await
        .unwrap_or(Outcome::Superseded)
    }

    /// Applies `step` to the view and loads the resulting query
    ///
    /// Returns `None` when `step` declines the navigation.
    async fn navigate<F>(&self, step: F) -> Option<Outcome>
    where
        F: FnOnce(&mut FeedView) -> bool,
    {
        let (generation, query) = {
            let mut nav = self.inner.nav.lock().await;
            if !step(&mut nav.view) {
                return None;
            }
            nav.generation += 1;
            nav.view.state = FeedState::Loading;
            self.inner.tx.send_replace(nav.view.clone());
            (nav.generation, nav.view.query.clone())
        };

        let result = load_page(&self.inner.transport, &query).await;

        let mut nav = self.inner.nav.lock().await;
        if nav.generation != generation {
            debug!(
                generation,
                current = nav.generation,
                mode = %query.mode,
                page = query.page,
                "superseded response"
            );
            return Some(Outcome::Superseded);
        }
        let state = match result {
            Ok(page) => {
                nav.view.total_results = Some(page.total_results);
                FeedState::Loaded(page)
            }
            Err(err) => {
                warn!(%err, mode = %query.mode, page = query.page, "feed load failed");
                FeedState::Errored(err.user_message().to_string())
            }
        };
        nav.view.state = state;
        self.inner.tx.send_replace(nav.view.clone());
        Some(Outcome::Applied)
    }
}
