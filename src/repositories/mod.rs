pub mod analytics_repository;
pub mod booking_repository;
pub mod company_repository;
pub mod customer_repository;
pub mod dashboard_repository;
pub mod personnel_repository;
pub mod route_repository;
pub mod station_repository;
pub mod trip_repository;
pub mod trip_stop_repository;
pub mod user_repository;
pub mod vehicle_repository;
