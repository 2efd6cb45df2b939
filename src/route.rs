//! Route definitions for the drivers and videos API
//!
//! This module wires every handler into the Axum router and assembles the
//! OpenAPI document served alongside it.

use axum::routing::{delete, get};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::database::AppState;
use crate::error::{ErrorMessages, ErrorsMessages, FieldError};
use crate::handler::{self, drivers, testing, videos};
use crate::model::{
    DriverAttributes, DriverCreateData, DriverCreateInput, DriverListOutput, DriverOutput,
    DriverUpdateData, DriverUpdateInput, ListMeta, Resolution, ResourceType, VehicleFeature,
    Video, VideoInput,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handler::hello,
        drivers::list_drivers,
        drivers::get_driver,
        drivers::create_driver,
        drivers::update_driver,
        drivers::delete_driver,
        videos::list_videos,
        videos::get_video,
        videos::create_video,
        videos::update_video,
        videos::delete_video,
        testing::clear_all_data
    ),
    components(schemas(
        ResourceType,
        VehicleFeature,
        Resolution,
        DriverAttributes,
        DriverCreateInput,
        DriverCreateData,
        DriverUpdateInput,
        DriverUpdateData,
        DriverOutput,
        DriverListOutput,
        ListMeta,
        Video,
        VideoInput,
        FieldError,
        ErrorMessages,
        ErrorsMessages
    ))
)]
pub struct ApiDoc;

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `GET /` - Greeting
/// - `GET|POST /api/drivers`, `GET|PUT|DELETE /api/drivers/{id}`
/// - `GET|POST /api/videos`, `GET|PUT|DELETE /api/videos/{id}`
/// - `DELETE /api/testing/all-data` - Empties both stores
/// - `GET /api-docs/openapi.json` - OpenAPI document
/// - `GET /swagger-ui/` - Swagger UI over that document
///
/// # Example Usage
///
/// ```no_run
/// # use inmem_api::database::AppState;
/// # use inmem_api::route::create_app;
/// let app = create_app(AppState::new());
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::hello))
        .route(
            "/api/drivers",
            get(drivers::list_drivers).post(drivers::create_driver),
        )
        .route(
            "/api/drivers/{id}",
            get(drivers::get_driver)
                .put(drivers::update_driver)
                .delete(drivers::delete_driver),
        )
        .route(
            "/api/videos",
            get(videos::list_videos).post(videos::create_video),
        )
        .route(
            "/api/videos/{id}",
            get(videos::get_video)
                .put(videos::update_video)
                .delete(videos::delete_video),
        )
        .route("/api/testing/all-data", delete(testing::clear_all_data))
        // Inject the application state into all handlers
        .with_state(state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
}
