//! # aidoo_core
//!
//! Core domain logic for the ai.doo site.
//!
//! - [`changelog`]: renders a Keep-a-Changelog style document to HTML and
//!   splices it into a marker-delimited region of a page.
//! - [`chat`]: the chat relay's conversation model and request validation.
//! - [`completion`]: the completion-service capability and its
//!   OpenAI-compatible client.

pub mod changelog;
pub mod chat;
pub mod completion;
