//! Pages module
//! Full-page views for the dashboard, favorites and history tabs.

pub mod dashboard;
pub mod favorites;
pub mod history;
