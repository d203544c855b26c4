use reqwest::header::ACCEPT;
use serde_json::Value;
use shared_types::{AppError, ClientConfig, UploadConfig, UploadedImage};

use super::{ApiRequest, Backend, ImageUpload, Method};

/// Header carrying a per-request correlation id.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// reqwest-backed [`Backend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    upload: UploadConfig,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.api.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| AppError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            upload: config.upload.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Turn a finished response into JSON or an [`AppError`].
async fn read_json(response: reqwest::Response) -> Result<Value, AppError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::network(format!("Connection dropped while reading response: {}", e)))?;

    if !status.is_success() {
        return Err(AppError::from_response_body(status.as_u16(), &text));
    }
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text)
        .map_err(|e| AppError::decode(format!("Server returned malformed JSON: {}", e)))
}

impl Backend for HttpBackend {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Value, AppError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let url = self.url(&request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Put => self.client.put(&url),
            Method::Post => self.client.post(&url),
        }
        .header(ACCEPT, "application/json")
        .header(REQUEST_ID_HEADER, &request_id);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, request_id = %request_id, "request failed before a response arrived");
            AppError::network("Could not reach the server. Check your connection.")
        })?;

        let status = response.status().as_u16();
        let result = read_json(response).await;
        match &result {
            Ok(_) => tracing::debug!(status, request_id = %request_id, "api call succeeded"),
            Err(e) => tracing::warn!(status, request_id = %request_id, error = %e, "api call failed"),
        }
        result
    }

    #[tracing::instrument(skip(self, upload), fields(kind = upload.kind.as_str(), file = %upload.file_name))]
    async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, AppError> {
        let size = upload.bytes.len();
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| AppError::server(format!("Unsupported image type: {}", e)))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("kind", upload.kind.as_str());
        if let Some(preset) = &self.upload.preset {
            form = form.text("upload_preset", preset.clone());
        }

        let response = self
            .client
            .post(&self.upload.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "image upload failed before a response arrived");
                AppError::network("Could not reach the image service.")
            })?;

        let body = read_json(response).await?;
        let url = hosted_url(&body)
            .ok_or_else(|| AppError::decode("Image service response had no URL"))?;

        tracing::info!(bytes = size, url = %url, "image uploaded");
        Ok(UploadedImage { url })
    }
}

/// Image hosts answer with `secure_url` (preferred) or `url`.
fn hosted_url(body: &Value) -> Option<String> {
    body.get("secure_url")
        .or_else(|| body.get("url"))
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
