// File: services/cartify_backend/src/main.rs
use cartify_common::logging;
use cartify_config::load_config;
use cartify_db::{DbClient, OrderRepository, SqlOrderRepository};
use cartify_orders::{routes as order_routes, OrdersState};
use cartify_stripe::StripeCheckoutGateway;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    // The repository and the gateway are both hard requirements; refuse to
    // start without them rather than serve a half-working API.
    let db_client = DbClient::new(&config)
        .await
        .expect("Failed to create database client");
    let repository = Arc::new(SqlOrderRepository::new(db_client));
    repository
        .init_schema()
        .await
        .expect("Failed to initialize database schema");

    let gateway =
        StripeCheckoutGateway::from_config(&config).expect("Failed to configure Stripe gateway");

    let state = Arc::new(OrdersState {
        gateway: Arc::new(gateway),
        repository,
    });

    #[allow(unused_mut)] // reassigned when the openapi feature is enabled
    let mut app = order_routes(state).layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use cartify_orders::doc::OrdersApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Cartify API",
                version = "0.1.0",
                description = "Cartify order service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags((name = "Orders", description = "Order service endpoints"))
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(OrdersApiDoc::openapi());
        info!("Adding Swagger UI at /docs");

        let swagger_ui = SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
