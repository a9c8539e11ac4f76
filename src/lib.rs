// ABOUTME: Library crate for termfolio exposing the app core for testing

pub mod app;
pub mod components;
pub mod config;
pub mod contact;
pub mod models;
