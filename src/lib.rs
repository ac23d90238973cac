pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod state;
pub mod view;
