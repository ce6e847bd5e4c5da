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

//! Focus endpoint: `POST /focus`.

use log::debug;
use stagecall_types::{requests::FocusRequest, responses::FocusResponse};

use crate::error::ApiError;
use crate::{parse_api_response, StageApiClient};

impl StageApiClient {
    /// Tell the server which stream is in focus so composed archives
    /// highlight it.
    ///
    /// Calls `POST /focus` with form field `focus`.
    pub async fn set_focus(&self, stream_id: &str) -> Result<FocusResponse, ApiError> {
        debug!("POST /focus {stream_id}");
        let body = FocusRequest {
            focus: stream_id.to_string(),
        };
        let response = self.post("/focus").form(&body).send().await?;
        parse_api_response(response).await
    }
}
