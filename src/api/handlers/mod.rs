//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod exercises;
pub mod health;
pub mod hello;
pub mod logs;
pub mod redirect;
pub mod shorten;
pub mod users;

pub use exercises::create_exercise_handler;
pub use health::{shortener_health_handler, tracker_health_handler};
pub use hello::hello_handler;
pub use logs::exercise_log_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_url_handler;
pub use users::{create_user_handler, list_users_handler};
