//! HTTP proxy between the Klar Hub storefront and the Gemini text-generation API.
//!
//! The browser POSTs `{ "prompt": ... }` to the chat route; the proxy attaches a
//! fixed system instruction, makes one upstream call with a server-held key and
//! answers with `{ "text": ... }` or a fixed `{ "error": ... }` message.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
