// Start of file: /src/shell/mod.rs

/*
    * Root application shell: resolves the request path against the route
    * table and renders the page component mounted there.
*/

pub mod pages;
pub mod route_table;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use maud::Markup;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::config::state::AppState;
use crate::database::{CaseRepository, RepositoryError};
use crate::models::{Case, CaseFilter, Client};
use crate::models::pagination::MAX_LIMIT;

pub use route_table::{PageComponent, Route, RouteTable, RouteTableBuilder, ShellError};

/// What the shell produced for one navigation.
#[derive(Debug)]
pub struct RenderedView {
    pub status: StatusCode,
    /// Mounted component, `None` for the not-found and error views.
    pub component: Option<PageComponent>,
    pub markup: Markup,
}

impl IntoResponse for RenderedView {
    fn into_response(self) -> Response {
        (self.status, Html(self.markup.into_string())).into_response()
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationShell {
    routes: RouteTable,
}

impl Default for ApplicationShell {
    fn default() -> Self {
        Self::new(RouteTable::application())
    }
}

impl ApplicationShell {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Renders the view for `path`. Unmatched paths get the not-found page with a 404.
    pub async fn render(&self, path: &str, repository: &dyn CaseRepository) -> RenderedView {
        let Some(route) = self.routes.resolve(path) else {
            info!(path, "No route mounted for path");
            return RenderedView {
                status: StatusCode::NOT_FOUND,
                component: None,
                markup: pages::not_found_page(path),
            };
        };

        let component: PageComponent = route.page();
        match render_component(component, repository).await {
            Ok(markup) => RenderedView {
                status: StatusCode::OK,
                component: Some(component),
                markup,
            },
            Err(e) => {
                error!(page = %component, "Failed to render page: {}", e);
                RenderedView {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    component: None,
                    markup: pages::error_page(),
                }
            }
        }
    }
}

async fn render_component(
    component: PageComponent,
    repository: &dyn CaseRepository,
) -> Result<Markup, RepositoryError> {
    match component {
        PageComponent::CaseList => {
            let cases: Vec<Case> = all_cases(repository).await?;

            let mut client_ids: Vec<Uuid> = cases.iter().map(|c| c.client_id).collect();
            client_ids.sort_unstable();
            client_ids.dedup();
            let clients: Vec<Client> = repository.clients_by_ids(&client_ids).await?;

            Ok(pages::case_list_page(&cases, &clients))
        }
    }
}

/// Every case in creation order, fetched one `MAX_LIMIT` window at a time.
async fn all_cases(repository: &dyn CaseRepository) -> Result<Vec<Case>, RepositoryError> {
    let mut cases: Vec<Case> = Vec::new();

    loop {
        let filter: CaseFilter = CaseFilter {
            skip: Some(cases.len() as i64),
            limit: Some(MAX_LIMIT),
            ..CaseFilter::default()
        };
        let batch: Vec<Case> = repository.list_cases(&filter).await?;
        let last_window: bool = (batch.len() as i64) < MAX_LIMIT;
        cases.extend(batch);

        if last_window {
            return Ok(cases);
        }
    }
}

/// Router fallback for GET and HEAD: every path not claimed by the API or static assets lands here.
#[instrument(skip(state), fields(path = %uri.path()))]
pub async fn shell_handler(State(state): State<AppState>, uri: Uri) -> RenderedView {
    state.shell.render(uri.path(), state.repository.as_ref()).await
}


// End of file: /src/shell/mod.rs
