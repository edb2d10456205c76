//! Route paths.

pub const API_CHAT: &str = "/api/chat";
