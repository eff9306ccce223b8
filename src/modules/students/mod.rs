pub mod controller;
pub mod model;
pub mod repo;
pub mod router;
pub mod service;
