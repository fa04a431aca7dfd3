//! Backend catalog: REST endpoints per resource and database schemas.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use docrouter_shared::ContextEnvelope;

use crate::catalog::{Entries, Groups, capitalize};
use crate::state::AppState;

pub const LIBRARY: &str = "backend";

pub const APIS: Groups = Groups(&[
    (
        "users",
        Entries(&[
            ("GET /api/users", "List all users in the system"),
            ("GET /api/users/{id}", "Get a specific user by ID"),
            ("POST /api/users", "Create a new user"),
            ("PUT /api/users/{id}", "Update a user by ID"),
            ("DELETE /api/users/{id}", "Delete a user by ID"),
        ]),
    ),
    (
        "products",
        Entries(&[
            ("GET /api/products", "List all products"),
            ("GET /api/products/{id}", "Get a specific product by ID"),
            ("POST /api/products", "Create a new product"),
            ("PUT /api/products/{id}", "Update a product by ID"),
            ("DELETE /api/products/{id}", "Delete a product by ID"),
        ]),
    ),
    (
        "orders",
        Entries(&[
            ("GET /api/orders", "List all orders"),
            ("GET /api/orders/{id}", "Get a specific order by ID"),
            ("POST /api/orders", "Create a new order"),
            ("PUT /api/orders/{id}", "Update an order by ID"),
            ("DELETE /api/orders/{id}", "Delete an order by ID"),
        ]),
    ),
]);

pub const SCHEMAS: Groups = Groups(&[
    (
        "users",
        Entries(&[
            ("id", "string (UUID)"),
            ("username", "string"),
            ("email", "string"),
            ("password_hash", "string"),
            ("created_at", "datetime"),
            ("updated_at", "datetime"),
        ]),
    ),
    (
        "products",
        Entries(&[
            ("id", "string (UUID)"),
            ("name", "string"),
            ("description", "string"),
            ("price", "float"),
            ("inventory", "integer"),
            ("created_at", "datetime"),
            ("updated_at", "datetime"),
        ]),
    ),
    (
        "orders",
        Entries(&[
            ("id", "string (UUID)"),
            ("user_id", "string (foreign key to users.id)"),
            ("status", "string (enum: pending, completed, cancelled)"),
            ("total", "float"),
            ("created_at", "datetime"),
            ("updated_at", "datetime"),
        ]),
    ),
]);

// ---------------------------------------------------------------------------
// Context resolution
// ---------------------------------------------------------------------------

/// Query for `/mcp/backend/context`. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct BackendQuery {
    pub resource: Option<String>,
    pub endpoint: Option<String>,
    pub schema: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendContext {
    pub library: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub documentation: String,
}

impl BackendContext {
    fn new(documentation: String) -> Self {
        Self {
            library: LIBRARY,
            resource: None,
            endpoint: None,
            schema: None,
            documentation,
        }
    }
}

/// Endpoint detail, then resource listing, then schema, then the overview.
pub fn resolve(query: &BackendQuery) -> BackendContext {
    let resource = non_empty(&query.resource);
    let endpoint = non_empty(&query.endpoint);
    let schema = non_empty(&query.schema);

    if let (Some(resource), Some(endpoint)) = (resource, endpoint) {
        if let Some(description) = APIS.get(resource).and_then(|eps| eps.get(endpoint)) {
            return BackendContext {
                resource: Some(resource.to_string()),
                endpoint: Some(endpoint.to_string()),
                ..BackendContext::new(format!("\n# {endpoint} ({resource})\n\n{description}\n"))
            };
        }
    }

    if let (Some(resource), None) = (resource, endpoint) {
        if let Some(endpoints) = APIS.get(resource) {
            let mut doc = format!("\n# {} API Endpoints\n\n", capitalize(resource));
            for (ep, description) in endpoints.iter() {
                doc.push_str(&format!("- {ep}: {description}\n"));
            }
            return BackendContext {
                resource: Some(resource.to_string()),
                ..BackendContext::new(doc)
            };
        }
    }

    if let Some(schema) = schema {
        if let Some(fields) = SCHEMAS.get(schema) {
            let mut doc = format!("\n# {} Schema\n\n", capitalize(schema));
            for (field, data_type) in fields.iter() {
                doc.push_str(&format!("- {field}: {data_type}\n"));
            }
            return BackendContext {
                schema: Some(schema.to_string()),
                ..BackendContext::new(doc)
            };
        }
    }

    debug!(?query, "no backend match, returning overview");
    BackendContext::new(overview())
}

fn overview() -> String {
    let mut doc = String::from("\n# Backend Resources\n\n## API Resources\n");
    for resource in APIS.names() {
        doc.push_str(&format!("- {resource}\n"));
    }
    doc.push_str("\n## Database Schemas\n");
    for schema in SCHEMAS.names() {
        doc.push_str(&format!("- {schema}\n"));
    }
    doc
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mcp/backend/context", get(backend_context))
        .route("/mcp/backend/apis", get(list_apis))
        .route("/mcp/backend/schemas", get(list_schemas))
}

async fn backend_context(
    Query(query): Query<BackendQuery>,
) -> Json<ContextEnvelope<BackendContext>> {
    Json(ContextEnvelope::new(resolve(&query)))
}

#[derive(Serialize)]
struct ApisBody {
    apis: Groups,
}

async fn list_apis() -> Json<ApisBody> {
    Json(ApisBody { apis: APIS })
}

#[derive(Serialize)]
struct SchemasBody {
    schemas: Groups,
}

async fn list_schemas() -> Json<SchemasBody> {
    Json(SchemasBody { schemas: SCHEMAS })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(resource: Option<&str>, endpoint: Option<&str>, schema: Option<&str>) -> BackendQuery {
        BackendQuery {
            resource: resource.map(String::from),
            endpoint: endpoint.map(String::from),
            schema: schema.map(String::from),
        }
    }

    #[test]
    fn endpoint_detail() {
        let ctx = resolve(&query(Some("users"), Some("GET /api/users"), None));
        assert_eq!(
            ctx.documentation,
            "\n# GET /api/users (users)\n\nList all users in the system\n"
        );
        assert_eq!(ctx.endpoint.as_deref(), Some("GET /api/users"));
    }

    #[test]
    fn resource_listing() {
        let ctx = resolve(&query(Some("orders"), None, None));
        assert!(
            ctx.documentation
                .starts_with("\n# Orders API Endpoints\n\n- GET /api/orders: List all orders\n")
        );
        assert_eq!(
            ctx.documentation
                .lines()
                .filter(|l| l.starts_with("- "))
                .count(),
            5
        );
    }

    #[test]
    fn schema_detail() {
        let ctx = resolve(&query(None, None, Some("products")));
        assert!(ctx.documentation.starts_with("\n# Products Schema\n\n- id: string (UUID)\n"));
        assert!(ctx.documentation.contains("- inventory: integer\n"));
        assert_eq!(ctx.schema.as_deref(), Some("products"));
    }

    #[test]
    fn unknown_endpoint_with_schema_uses_schema() {
        let ctx = resolve(&query(Some("users"), Some("PATCH /api/users"), Some("orders")));
        assert!(ctx.documentation.starts_with("\n# Orders Schema"));
        assert!(ctx.resource.is_none());
    }

    #[test]
    fn nothing_matching_gives_overview() {
        let ctx = resolve(&query(Some("widgets"), None, None));
        assert_eq!(
            ctx.documentation,
            concat!(
                "\n# Backend Resources\n\n## API Resources\n- users\n- products\n- orders\n",
                "\n## Database Schemas\n- users\n- products\n- orders\n",
            )
        );
        assert_eq!(
            resolve(&BackendQuery::default()).documentation,
            ctx.documentation
        );
    }

    #[test]
    fn empty_values_are_absent() {
        let ctx = resolve(&query(Some("users"), Some(""), None));
        assert!(ctx.documentation.starts_with("\n# Users API Endpoints"));
    }
}
