pub mod model;
pub mod rest;
pub mod service;
pub mod templates;
