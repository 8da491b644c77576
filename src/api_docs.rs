//! OpenAPI documentation for the test server.
//!
//! The generated document drives the interactive Swagger UI at `/docs`, the
//! ReDoc reference view at `/redoc`, and the raw specification at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::routes::{health, home, info, test};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docker Test Server",
        description = "A server for testing Docker deployment",
    ),
    paths(
        home::index,
        health::health,
        info::info,
        test::test,
    ),
    components(schemas(
        health::HealthResponse,
        info::InfoResponse,
        info::EnvironmentVariables,
        test::TestResponse,
    )),
    tags(
        (name = "general", description = "Welcome page"),
        (name = "probes", description = "Deployment verification endpoints")
    )
)]
pub struct ApiDoc;
