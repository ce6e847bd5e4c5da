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

//! Page bootstrap endpoints: `/host` and `/participant`.

use stagecall_types::responses::{PageBootstrap, PageRole};

use crate::error::ApiError;
use crate::{parse_api_response, StageApiClient};

impl StageApiClient {
    /// Fetch the session id, shared layout and focus a page should start with.
    ///
    /// Calls `GET /host` or `GET /participant`.
    pub async fn page_bootstrap(&self, role: PageRole) -> Result<PageBootstrap, ApiError> {
        let path = match role {
            PageRole::Host => "/host",
            PageRole::Participant => "/participant",
        };
        let response = self.get(path).send().await?;
        parse_api_response(response).await
    }
}
