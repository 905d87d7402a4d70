// src/api/mod.rs
//! Notion API interaction: the transport seam, response decoding, cursor
//! pagination and the typed client built on top of them.

pub mod client;
mod pagination;
pub mod parser;
pub mod transport;

pub use client::NotionClient;
pub use pagination::fetch_all_pages;
pub use parser::parse_response;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
