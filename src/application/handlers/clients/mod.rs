//! Client administration handlers.

mod save_client;

pub use save_client::{
    SaveClientCommand, SaveClientError, SaveClientHandler, SaveClientResult, CLIENT_SAVED_MESSAGE,
};
