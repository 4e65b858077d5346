pub mod analytics_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod company_controller;
pub mod customer_controller;
pub mod dashboard_controller;
pub mod personnel_controller;
pub mod route_controller;
pub mod station_controller;
pub mod trip_controller;
pub mod trip_stop_controller;
pub mod vehicle_controller;
