pub mod company;
pub mod customer;
pub mod personnel;
pub mod route;
pub mod station;
pub mod trip;
pub mod trip_stop;
pub mod user;
pub mod vehicle;
