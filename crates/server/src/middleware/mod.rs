//! Middleware configuration and session helpers.

pub mod session;

pub use session::{
    clear_current_user, create_session_layer, current_user, discount, set_current_user,
    set_discount, set_notice, take_notice,
};
