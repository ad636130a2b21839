//! UI module for the mood dashboard
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): composable UI patterns without business logic
//! - **Components** (`components`): business-specific UI with Message handling
//! - **Pages** (`pages`): full-page views composed from components
//! - **Effects** (`effects`): decorative canvas layers
//! - **Theme** (`theme`): palette and style functions for both modes

pub mod components;
pub mod effects;
pub mod pages;
pub mod theme;
pub mod widgets;
