// ABOUTME: Application core: state, events, notifications, and animations

pub mod animation;
pub mod easter_egg;
pub mod events;
pub mod notification;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use state::{App, AppState, Page, Theme};
