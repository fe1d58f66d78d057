use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use canastra::middleware::{RequestTrace, StructuredLogger};
use canastra::routes;
use canastra::state::app_state::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
    route_config: Option<RouteConfigFn>,
    wrap_shared_txn: Option<canastra::db::txn::SharedTxn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: None,
            wrap_shared_txn: None,
        }
    }

    /// Register the production routes (and the 404 fallback)
    pub fn with_prod_routes(mut self) -> Self {
        self.route_config = Some(Box::new(routes::configure) as RouteConfigFn);
        self
    }

    /// Configure the app with custom routes
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    /// Route every request through `shared` instead of a per-request transaction
    pub fn with_shared_txn(mut self, shared: canastra::db::txn::SharedTxn) -> Self {
        self.wrap_shared_txn = Some(shared);
        self
    }

    /// Build the test service with the production middleware order
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let route_config = self.route_config;
        let shared = self.wrap_shared_txn;

        test::init_service(
            App::new()
                .wrap_fn(move |req, srv| {
                    use actix_web::dev::Service as _;
                    use actix_web::HttpMessage as _;
                    if let Some(shared) = &shared {
                        req.extensions_mut().insert(shared.clone());
                    }
                    srv.call(req)
                })
                .wrap(StructuredLogger)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| {
                    if let Some(config_fn) = &route_config {
                        config_fn(cfg);
                    }
                })
                .default_service(web::to(routes::not_found)),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
