//! Search controller
//!
//! Coordinates the order API, the pagination engine and the view for one
//! browsing surface. All methods take `&self`; the session lives behind a
//! lock that is never held across a network call. Every action captures the
//! session id (and, for pages, the engine epoch) when it is dispatched and
//! applies its response only if both still match.

use super::types::{NavOutcome, PageSnapshot, SearchOutcome, Session, SessionId, SessionSnapshot};
use crate::api::OrderApi;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result};
use crate::pagination::{Direction, PageOutcome, PageRequest};
use crate::view::{Panel, View};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Message shown when a search is submitted without an order uid
pub const EMPTY_SEARCH_MESSAGE: &str = "Please enter an Order UID";

#[derive(Debug, Default)]
struct ControllerState {
    last_id: u64,
    session: Option<Session>,
}

impl ControllerState {
    fn begin(&mut self, order_uid: &str, page_size: u32) -> SessionId {
        self.last_id += 1;
        let id = SessionId(self.last_id);
        self.session = Some(Session::new(id, order_uid, page_size));
        id
    }

    fn current_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.session.as_mut().filter(|s| s.id == id)
    }

    fn is_current(&self, id: SessionId) -> bool {
        self.session.as_ref().is_some_and(|s| s.id == id)
    }
}

/// Drives searches and page navigation
pub struct SearchController<A, V> {
    api: A,
    view: V,
    page_size: u32,
    state: RwLock<ControllerState>,
}

impl<A: OrderApi, V: View> SearchController<A, V> {
    /// Create a controller with the default page size
    pub fn new(api: A, view: V) -> Self {
        Self::with_page_size(api, view, DEFAULT_PAGE_SIZE)
    }

    /// Create a controller with a custom page size
    pub fn with_page_size(api: A, view: V, page_size: u32) -> Self {
        Self {
            api,
            view,
            page_size,
            state: RwLock::new(ControllerState::default()),
        }
    }

    /// The view this controller renders to
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The API this controller reads from
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Items requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Copy of the current session, if a search has been submitted
    pub async fn snapshot(&self) -> Option<SessionSnapshot> {
        self.state.read().await.session.as_ref().map(Session::snapshot)
    }

    /// Look up an order and show its first page of items
    ///
    /// Empty input fails with `Error::Validation` and touches nothing. Any
    /// other input replaces the current session before the lookup starts.
    pub async fn submit_search(&self, input: &str) -> Result<SearchOutcome> {
        let order_uid = input.trim();
        if order_uid.is_empty() {
            self.view.show_error(EMPTY_SEARCH_MESSAGE);
            return Err(Error::validation(EMPTY_SEARCH_MESSAGE));
        }

        let id = self.state.write().await.begin(order_uid, self.page_size);
        info!(%id, order_uid, "starting search");

        self.view.reset();
        self.view.show_loading(Panel::Order);

        let lookup = self.api.get_order(order_uid).await;

        let (order, request) = {
            let mut state = self.state.write().await;
            let Some(session) = state.current_mut(id) else {
                debug!(%id, "dropping lookup for replaced session");
                return Ok(SearchOutcome::Superseded);
            };

            match lookup {
                Ok(order) => {
                    session.order = Some(order.clone());
                    self.view.render_order(&order);
                    (order, session.engine.plan_first())
                }
                Err(e) => {
                    let err = as_lookup(e);
                    warn!(%id, order_uid, error = %err, "order lookup failed");
                    self.view.clear_loading(Panel::Order);
                    self.view.show_error(&err.to_string());
                    return Err(err);
                }
            }
        };

        let first_page = self.fetch_and_apply(id, order_uid, request).await?;
        if !self.state.read().await.is_current(id) {
            return Ok(SearchOutcome::Superseded);
        }
        Ok(SearchOutcome::Loaded { order, first_page })
    }

    /// Move one page forward
    pub async fn next(&self) -> Result<NavOutcome> {
        self.navigate(Direction::Next).await
    }

    /// Move one page back by re-fetching from the earlier boundary
    pub async fn previous(&self) -> Result<NavOutcome> {
        self.navigate(Direction::Previous).await
    }

    async fn navigate(&self, direction: Direction) -> Result<NavOutcome> {
        let (id, order_uid, request) = {
            let state = self.state.read().await;
            let Some(session) = state.session.as_ref().filter(|s| s.is_loaded()) else {
                return Ok(NavOutcome::Disabled);
            };

            let plan = match direction {
                Direction::Next => session.engine.plan_next(),
                Direction::Previous => session.engine.plan_previous(),
                Direction::First => Some(session.engine.plan_first()),
            };
            let Some(request) = plan else {
                debug!(id = %session.id, ?direction, "navigation disabled");
                return Ok(NavOutcome::Disabled);
            };
            (session.id, session.order_uid.clone(), request)
        };

        self.fetch_and_apply(id, &order_uid, request).await
    }

    async fn fetch_and_apply(
        &self,
        id: SessionId,
        order_uid: &str,
        request: PageRequest,
    ) -> Result<NavOutcome> {
        debug!(
            %id,
            cursor = request.cursor,
            limit = request.limit,
            direction = ?request.direction,
            "requesting page"
        );
        self.view.show_loading(Panel::Items);

        let fetched = self
            .api
            .get_items(order_uid, request.cursor, request.limit)
            .await;

        let mut state = self.state.write().await;
        let Some(session) = state.current_mut(id) else {
            debug!(%id, cursor = request.cursor, "dropping page for replaced session");
            return Ok(NavOutcome::Stale);
        };

        let applied = fetched
            .map_err(as_page_fetch)
            .and_then(|items| session.engine.apply(&request, &items).map(|o| (o, items)));

        match applied {
            Ok((PageOutcome::Shown { .. }, items)) => {
                let controls = session.engine.controls();
                self.view.render_items(&items);
                self.view.set_controls(controls);
                Ok(NavOutcome::Page(PageSnapshot { items, controls }))
            }
            Ok((PageOutcome::Empty, _)) => {
                self.view.render_empty_items();
                self.view.set_controls(session.engine.controls());
                Ok(NavOutcome::Empty)
            }
            Ok((PageOutcome::Stale, _)) => Ok(NavOutcome::Stale),
            Err(err) => {
                warn!(%id, cursor = request.cursor, error = %err, "page fetch failed");
                self.view.clear_loading(Panel::Items);
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }
}

impl<A, V> std::fmt::Debug for SearchController<A, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

fn as_lookup(err: Error) -> Error {
    match err {
        Error::Lookup { .. } => err,
        other => Error::lookup(other.to_string()),
    }
}

fn as_page_fetch(err: Error) -> Error {
    match err {
        Error::PageFetch { .. } => err,
        other => Error::page_fetch(other.to_string()),
    }
}
