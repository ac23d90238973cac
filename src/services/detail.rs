use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info};

use crate::catalog::CatalogClient;
use crate::view::{DetailView, ViewState};

/// Drives a [`DetailView`] against a catalog: navigates, fetches without
/// holding the view lock, then resolves.
pub struct DetailController {
    catalog: Arc<dyn CatalogClient>,
    view: Mutex<DetailView>,
    published: watch::Sender<ViewState>,
}

impl DetailController {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        let (published, _) = watch::channel(ViewState::Loading);
        Self {
            catalog,
            view: Mutex::new(DetailView::new()),
            published,
        }
    }

    /// Shows course `id` and returns the view state once it settles.
    ///
    /// If another `open` for a different id starts while this fetch is in
    /// flight, this fetch's outcome is dropped and the newer state returned.
    /// Opening the id that is already loading waits for that fetch instead
    /// of issuing a second one.
    pub async fn open(&self, id: &str) -> ViewState {
        let ticket = {
            let mut view = self.view.lock().await;
            match view.navigate(id) {
                Some(ticket) => {
                    self.published.send_replace(ViewState::Loading);
                    ticket
                }
                None if view.state().is_terminal() => {
                    debug!("course {} already current", id);
                    return view.state().clone();
                }
                None => {
                    debug!("course {} already loading, waiting", id);
                    let mut settled = self.published.subscribe();
                    drop(view);
                    let state = settled
                        .wait_for(ViewState::is_terminal)
                        .await
                        .map(|state| state.clone());
                    return match state {
                        Ok(state) => state,
                        Err(_) => self.state().await,
                    };
                }
            }
        };

        info!("loading course {} (generation {})", id, ticket.generation);
        let outcome = self.catalog.fetch_course(id).await;

        let mut view = self.view.lock().await;
        if view.resolve(&ticket, outcome) {
            self.published.send_replace(view.state().clone());
        }
        view.state().clone()
    }

    pub async fn state(&self) -> ViewState {
        self.view.lock().await.state().clone()
    }
}
