// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the service contract it encodes, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API endpoint
// ---------------------------------------------------------------------------

/// Root of every Notion REST endpoint.
pub const API_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header unless overridden.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Header carrying the API version.
pub const NOTION_VERSION_HEADER: &str = "Notion-Version";

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips when draining a list endpoint.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Query parameter carrying the continuation cursor on follow-up page requests.
pub const CURSOR_QUERY_PARAM: &str = "next_cursor";

/// Query parameter carrying the requested page size.
pub const PAGE_SIZE_QUERY_PARAM: &str = "page_size";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing undecodable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the integration token.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Environment variable overriding the API version.
pub const NOTION_VERSION_ENV: &str = "NOTION_VERSION";

/// Environment variable overriding the base URL (useful against a local mock).
pub const BASE_URL_ENV: &str = "NOTION_BASE_URL";
