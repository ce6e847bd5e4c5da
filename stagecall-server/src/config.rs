/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Application configuration loaded from environment variables.

use std::env;

/// Configuration for the signaling server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8080").
    pub listen_addr: String,
    /// Video session every page joins.
    pub session_id: String,
    /// Name given to every archive this server starts.
    pub archive_name: String,
    /// Where the in-memory backend pretends recorded files live.
    pub archive_base_url: String,
    /// Archives per `/history` page.
    pub history_page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8080"`)
    /// - `SESSION_ID` (default: a fresh UUID)
    /// - `ARCHIVE_NAME` (default: `"Archiving Sample App"`)
    /// - `ARCHIVE_BASE_URL` (default: `"https://archives.invalid"`)
    /// - `HISTORY_PAGE_SIZE` (default: `"5"`)
    pub fn from_env() -> Result<Self, String> {
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let session_id = env::var("SESSION_ID")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let archive_name =
            env::var("ARCHIVE_NAME").unwrap_or_else(|_| "Archiving Sample App".to_string());
        let archive_base_url = env::var("ARCHIVE_BASE_URL")
            .unwrap_or_else(|_| "https://archives.invalid".to_string());
        let history_page_size = env::var("HISTORY_PAGE_SIZE")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or("HISTORY_PAGE_SIZE must be a positive integer")?;

        Ok(Self {
            listen_addr,
            session_id,
            archive_name,
            archive_base_url,
            history_page_size,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            session_id: uuid::Uuid::new_v4().to_string(),
            archive_name: "Archiving Sample App".to_string(),
            archive_base_url: "https://archives.invalid".to_string(),
            history_page_size: 5,
        }
    }
}
