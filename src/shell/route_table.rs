// Start of file: /src/shell/route_table.rs

/*
    * The application's navigation table: an ordered list of
    * (path pattern, page component) pairs, built once and never mutated.
*/

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use thiserror::Error;

/// Page components a route can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageComponent {
    CaseList,
}

impl PageComponent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CaseList => "CaseListPage",
        }
    }
}

impl fmt::Display for PageComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    page: PageComponent,
}

impl Route {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn page(&self) -> PageComponent {
        self.page
    }

    // Patterns are literal paths; only exact matches count.
    fn matches(&self, path: &str) -> bool {
        self.pattern == path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("route pattern '{0}' is registered more than once")]
    DuplicateRoute(String),

    #[error("route pattern '{0}' must be an absolute path")]
    InvalidPattern(String),
}

/// Immutable, cheaply cloneable route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Arc<[Route]>,
}

static APPLICATION_ROUTES: Lazy<RouteTable> = Lazy::new(|| RouteTable {
    routes: Arc::from(vec![Route {
        pattern: "/".to_string(),
        page: PageComponent::CaseList,
    }]),
});

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The table the service ships with: `/` mounts the case list.
    pub fn application() -> Self {
        APPLICATION_ROUTES.clone()
    }

    /// First route whose pattern equals `path`.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(path))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    pub fn route(mut self, pattern: impl Into<String>, page: PageComponent) -> Self {
        self.routes.push(Route { pattern: pattern.into(), page });
        self
    }

    /// Freezes the table. Patterns must be absolute and unique.
    pub fn build(self) -> Result<RouteTable, ShellError> {
        for (i, route) in self.routes.iter().enumerate() {
            if !route.pattern.starts_with('/') {
                return Err(ShellError::InvalidPattern(route.pattern.clone()));
            }
            if self.routes[..i].iter().any(|r| r.pattern == route.pattern) {
                return Err(ShellError::DuplicateRoute(route.pattern.clone()));
            }
        }

        Ok(RouteTable { routes: Arc::from(self.routes) })
    }
}


// End of file: /src/shell/route_table.rs
