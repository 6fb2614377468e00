//! # ubl-service
//!
//! Application layer: ban list retrieval over a `FeedSource`, the login gate,
//! kick message rendering and plugin metadata.

pub mod services;

pub use services::{
    render_kick_message, render_plain, translate_color_codes, BanListService, BanSummary,
    LoginDecision, LoginGate, PluginInfo, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
