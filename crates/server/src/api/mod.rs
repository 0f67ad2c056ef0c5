pub mod handlers;
pub mod middleware;
pub mod movies;
pub mod params;
pub mod routes;
pub mod views;

pub use routes::create_router;
