pub mod analytics_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod company_routes;
pub mod customer_routes;
pub mod dashboard_routes;
pub mod personnel_routes;
pub mod route_routes;
pub mod station_routes;
pub mod trip_routes;
pub mod trip_stop_routes;
pub mod vehicle_routes;
