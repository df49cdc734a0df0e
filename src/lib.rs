#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod id_generator;
pub mod item;
pub mod notice;
pub mod panels;
pub mod seed;
pub mod state;
pub mod util;

pub use app::{TodoAction, TodoApp};
pub use config::AppConfig;
pub use error::{TodoError, TodoResult};
pub use event::{EventBus, EventHandler, SubscriptionId, TodoEvent};
pub use item::{TodoIcon, TodoId, TodoItem};
pub use state::TodoState;
