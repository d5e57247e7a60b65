// Presentation layer - HTML rendering and HTTP handlers
pub mod app_state;
pub mod badge;
pub mod cards;
pub mod figures;
pub mod handlers;
pub mod markup;
pub mod page;
pub mod report_card;
pub mod theme;
