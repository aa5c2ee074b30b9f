mod app_route;
pub mod routes;

pub use app_route::AppRoute;
