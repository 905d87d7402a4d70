// src/api/client.rs
//! Typed Notion API client.
//!
//! Each public operation is one logical call: a single exchange for
//! get/create/update, or a pagination run for list endpoints. The client
//! holds only its immutable configuration and the transport.

use super::pagination::fetch_all_pages;
use super::parser::parse_response;
use super::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::config::ClientConfig;
use crate::constants::{
    CURSOR_QUERY_PARAM, NOTION_API_PAGE_SIZE, NOTION_VERSION_HEADER, PAGE_SIZE_QUERY_PARAM,
};
use crate::error::{NotionError, Result};
use crate::model::{
    AppendBlockChildrenRequest, Block, Database, ListResponse, Page, UpdatePageRequest, User,
};
use crate::types::{BlockId, DatabaseId, PageId, UserId};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Client for the Notion REST API.
#[derive(Debug, Clone)]
pub struct NotionClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl NotionClient<ReqwestTransport> {
    /// Builds a client over a fresh blocking reqwest transport.
    pub fn with_default_transport(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> NotionClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // --- Databases ---

    pub fn get_database(&self, id: &DatabaseId) -> Result<Database> {
        self.get(&format!("databases/{}", id.to_dashed()))
    }

    /// Lists every database shared with the integration.
    pub fn list_databases(&self) -> Result<Vec<Database>> {
        self.list("databases")
    }

    // --- Pages ---

    pub fn get_page(&self, id: &PageId) -> Result<Page> {
        self.get(&format!("pages/{}", id.to_dashed()))
    }

    /// Creates a page. Only the fields set on `page` are sent.
    pub fn create_page(&self, page: &Page) -> Result<Page> {
        if page.parent.is_none() {
            return Err(crate::types::ValidationError::EmptyField("parent").into());
        }
        self.post("pages", page)
    }

    /// Updates the properties of a page. Only `page.properties` is sent;
    /// any id, parent or other resource field on `page` is ignored.
    pub fn update_page(&self, id: &PageId, page: &Page) -> Result<Page> {
        self.post(
            &format!("pages/{}", id.to_dashed()),
            &UpdatePageRequest::from_page(page),
        )
    }

    // --- Blocks ---

    pub fn get_block(&self, id: &BlockId) -> Result<Block> {
        self.get(&format!("blocks/{}", id.to_dashed()))
    }

    /// Lists all direct children of a block (or page), in page order.
    pub fn list_block_children(&self, id: &BlockId) -> Result<Vec<Block>> {
        self.list(&format!("blocks/{}/children", id.to_dashed()))
    }

    /// Appends blocks to a parent and returns the blocks the service created.
    pub fn append_block_children(&self, id: &BlockId, children: &[Block]) -> Result<Vec<Block>> {
        let response: ListResponse<Block> = self.post(
            &format!("blocks/{}/children", id.to_dashed()),
            &AppendBlockChildrenRequest { children },
        )?;
        Ok(response.results)
    }

    // --- Users ---

    pub fn get_user(&self, id: &UserId) -> Result<User> {
        self.get(&format!("users/{}", id.to_dashed()))
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.list("users")
    }

    // --- Request plumbing ---

    fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.config.base_url.join(path);
        let response = self.send(HttpMethod::Get, &url, None)?;
        parse_response(&response, &url)
    }

    fn post<R: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<R> {
        let url = self.config.base_url.join(path);
        let body = serde_json::to_string(body).map_err(NotionError::Encode)?;
        let response = self.send(HttpMethod::Post, &url, Some(body))?;
        parse_response(&response, &url)
    }

    fn list<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>> {
        let base = self.config.base_url.join(path);
        fetch_all_pages(|cursor| {
            let url = page_url(&base, cursor);
            let response = self.send(HttpMethod::Get, &url, None)?;
            parse_response::<ListResponse<R>>(&response, &url)
        })
    }

    fn send(&self, method: HttpMethod, url: &str, body: Option<String>) -> Result<HttpResponse> {
        log::debug!("{} {}", method.as_str(), url);
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: self.headers(),
            body,
        };
        let response = self.transport.execute(request)?;
        log::debug!("{} {} -> {}", method.as_str(), url, response.status);
        Ok(response)
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.api_key.as_str()),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                NOTION_VERSION_HEADER.to_string(),
                self.config.notion_version.clone(),
            ),
        ]
    }
}

/// Adds the page size and, after the first page, the continuation cursor.
fn page_url(base: &str, cursor: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair(PAGE_SIZE_QUERY_PARAM, &NOTION_API_PAGE_SIZE.to_string());
    if let Some(cursor) = cursor {
        query.append_pair(CURSOR_QUERY_PARAM, cursor);
    }
    format!("{}?{}", base, query.finish())
}
