// src/lib.rs
//! notionkit: a typed, blocking client for the Notion REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `NotionError`, `TransportError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `ClientConfig`, CLI input
//! - **Domain model**: `Page`, `Database`, `Block`, `User`, property values and configs
//! - **Domain types**: typed ids, `ApiKey`, `PropertyName`, open vocabularies
//! - **API client**: `NotionClient`, the `Transport` seam, pagination and parsing

pub mod api;
mod config;
pub mod constants;
mod error;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{NotionError, NotionErrorCode, Result, TransportError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, Command, CommandLineInput};

// --- Domain Model ---
pub use crate::model::{
    plain_text, Annotations, Block, BlockContent, Database, DateValue, FileObject, FileSource,
    FormulaResult, ListResponse, Mention, NotionDate, Page, Parent, PropertyConfig,
    PropertyTypeConfig, PropertyTypeValue, PropertyValue, RichText, RichTextContent, RollupValue,
    SelectOption, User, UserKind,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, BaseUrl, BlockId, BlockType, Color, DatabaseId, ObjectType, PageId, PropertyName,
    PropertyType, UserId,
};

// --- API Client ---
pub use crate::api::{
    HttpMethod, HttpRequest, HttpResponse, NotionClient, ReqwestTransport, Transport,
};
