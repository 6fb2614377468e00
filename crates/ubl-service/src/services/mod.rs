//! Ban list services
//!
//! Every service borrows a [`ServiceContext`] and fetches the feed afresh on each call.

pub mod ban_list;
pub mod context;
pub mod error;
pub mod info;
pub mod kick_message;
pub mod login_gate;

#[cfg(test)]
pub(crate) mod testing;

pub use ban_list::{BanListService, BanSummary};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use info::PluginInfo;
pub use kick_message::{render_kick_message, render_plain, translate_color_codes};
pub use login_gate::{LoginDecision, LoginGate};
