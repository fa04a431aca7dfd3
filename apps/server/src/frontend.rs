//! Frontend catalog: UI components and pages.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use docrouter_shared::ContextEnvelope;

use crate::catalog::Entries;
use crate::state::AppState;

pub const LIBRARY: &str = "frontend";

pub const COMPONENTS: Entries = Entries(&[
    ("Button", "A reusable button component with various styles and states."),
    ("Card", "A container component for displaying content in a card format."),
    ("Form", "A form component with validation and submission handling."),
    ("Navigation", "A navigation bar component for site navigation."),
]);

pub const PAGES: Entries = Entries(&[
    ("HomePage", "The main landing page of the application."),
    ("Dashboard", "User dashboard with analytics and actions."),
    ("Settings", "User settings and preferences page."),
    ("Profile", "User profile page with personal information."),
]);

#[derive(Debug, Default, Deserialize)]
pub struct FrontendQuery {
    pub component: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontendContext {
    pub library: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    pub documentation: String,
}

/// A named component wins over a page; neither gives the full listing.
/// Unknown names still answer, with a "not found" body.
pub fn resolve(query: &FrontendQuery) -> FrontendContext {
    let component = query.component.as_deref().filter(|c| !c.is_empty());
    let page = query.page.as_deref().filter(|p| !p.is_empty());

    if let Some(component) = component {
        let info = COMPONENTS.get(component).unwrap_or("Component not found");
        return FrontendContext {
            library: LIBRARY,
            component: Some(component.to_string()),
            page: None,
            documentation: format!("\n# {component}\n\n{info}\n"),
        };
    }

    if let Some(page) = page {
        let info = PAGES.get(page).unwrap_or("Page not found");
        return FrontendContext {
            library: LIBRARY,
            component: None,
            page: Some(page.to_string()),
            documentation: format!("\n# {page}\n\n{info}\n"),
        };
    }

    let mut doc = String::from("\n# Frontend Resources\n\n## Components\n");
    for (name, description) in COMPONENTS.iter() {
        doc.push_str(&format!("- {name}: {description}\n"));
    }
    doc.push_str("\n## Pages\n");
    for (name, description) in PAGES.iter() {
        doc.push_str(&format!("- {name}: {description}\n"));
    }

    FrontendContext {
        library: LIBRARY,
        component: None,
        page: None,
        documentation: doc,
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mcp/frontend/context", get(frontend_context))
        .route("/mcp/frontend/components", get(list_components))
        .route("/mcp/frontend/pages", get(list_pages))
}

async fn frontend_context(
    Query(query): Query<FrontendQuery>,
) -> Json<ContextEnvelope<FrontendContext>> {
    Json(ContextEnvelope::new(resolve(&query)))
}

#[derive(Serialize)]
struct ComponentsBody {
    components: Entries,
}

async fn list_components() -> Json<ComponentsBody> {
    Json(ComponentsBody {
        components: COMPONENTS,
    })
}

#[derive(Serialize)]
struct PagesBody {
    pages: Entries,
}

async fn list_pages() -> Json<PagesBody> {
    Json(PagesBody { pages: PAGES })
}
