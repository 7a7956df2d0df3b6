//! Classification model client.
//!
//! [`ClassificationModel`] holds the endpoint configuration, builds the
//! query-parameterized inference URL, dispatches exactly one HTTP call per
//! [`ClassificationModel::classify`] invocation, and parses the JSON
//! response into a [`PredictionGroup`].

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use pictag_models::{ImageDims, PredictionGroup};

use crate::config::ClassifierConfig;
use crate::endpoint;
use crate::error::{ClientError, ClientResult};
use crate::probe::{HttpImageProbe, ImageUrlCheck};

/// JPEG quality used when re-encoding local images for upload.
const JPEG_QUALITY: u8 = 90;

/// Client for a hosted classification model.
pub struct ClassificationModel {
    config: ClassifierConfig,
    slug: String,
    http: Client,
    api_url: Option<String>,
    url_check: Box<dyn ImageUrlCheck>,
}

impl ClassificationModel {
    /// Create a client from a configuration.
    ///
    /// Fails when the model identifier is not in `<workspace>/<slug>` form
    /// or the HTTP client cannot be built. When the configuration already
    /// carries a dataset slug and version, the inference URL is generated
    /// eagerly.
    pub fn new(config: ClassifierConfig) -> ClientResult<Self> {
        let slug = endpoint::model_slug(&config.model_id)
            .ok_or_else(|| {
                ClientError::config_error(format!(
                    "model id `{}` is not in <workspace>/<slug> form",
                    config.model_id
                ))
            })?
            .to_string();

        let http = Client::builder().timeout(config.timeout).build()?;

        let mut model = Self {
            config,
            slug,
            http,
            api_url: None,
            url_check: Box::new(HttpImageProbe::new()),
        };
        model.regenerate_url();
        Ok(model)
    }

    /// Create a client from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClassifierConfig::from_env()?)
    }

    /// Replace the image-URL reachability check used by the classify
    /// precondition.
    pub fn with_url_check(mut self, check: Box<dyn ImageUrlCheck>) -> Self {
        self.url_check = check;
        self
    }

    /// Load a model by dataset slug and version.
    ///
    /// Replaces the stored slug and version and regenerates the inference
    /// URL. Side effect only.
    pub fn load_model(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.config.name = Some(name.into());
        self.config.version = Some(version.into());
        self.regenerate_url();
        debug!(url = ?self.api_url, "inference URL regenerated");
    }

    /// The currently generated inference URL, if name and version are set.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Run inference on an image.
    ///
    /// `image_ref` is a local filesystem path when `hosted` is false, or an
    /// opaque remote image URL when `hosted` is true. Hosted references are
    /// never existence-checked or opened locally.
    ///
    /// Local mode re-encodes the image as JPEG and POSTs it base64-encoded;
    /// hosted mode appends the URL-encoded reference as a query parameter
    /// and issues a GET. Exactly one outbound call is made either way.
    pub async fn classify(&mut self, image_ref: &str, hosted: bool) -> ClientResult<PredictionGroup> {
        self.regenerate_url();
        let api_url = self
            .api_url
            .clone()
            .ok_or_else(|| {
                ClientError::config_error(
                    "dataset name and version must be set before classify (call load_model)",
                )
            })?;

        if !hosted {
            self.check_image_exists(image_ref).await?;

            let img = image::open(Path::new(image_ref))?.to_rgb8();
            let dims = ImageDims::new(img.width(), img.height());

            let mut jpeg = Vec::new();
            JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(&img)?;
            let body = BASE64.encode(&jpeg);

            debug!(url = %api_url, jpeg_bytes = jpeg.len(), "dispatching local-image classification");
            let response = self
                .http
                .post(&api_url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body)
                .send()
                .await?;

            self.parse_response(response, image_ref, dims).await
        } else {
            let url = format!("{}&image={}", api_url, urlencoding::encode(image_ref));

            debug!(url = %url, "dispatching hosted-image classification");
            let response = self.http.get(&url).send().await?;

            self.parse_response(response, image_ref, ImageDims::unknown())
                .await
        }
    }

    /// Classify precondition: the local path must exist on disk, or be
    /// recognizable as a reachable remote image URL.
    async fn check_image_exists(&self, image_ref: &str) -> ClientResult<()> {
        if std::fs::metadata(image_ref).is_ok() {
            return Ok(());
        }
        if self.url_check.is_reachable_image(image_ref).await {
            return Ok(());
        }
        debug!(
            probe = self.url_check.name(),
            "image reference is neither a local file nor a reachable URL"
        );
        Err(ClientError::missing_image(image_ref))
    }

    async fn parse_response(
        &self,
        response: Response,
        image_ref: &str,
        dims: ImageDims,
    ) -> ClientResult<PredictionGroup> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "classification endpoint returned an error");
            return Err(ClientError::remote(body));
        }

        let value: serde_json::Value = response.json().await?;
        Ok(PredictionGroup::from_response(value, image_ref, dims))
    }

    /// Regenerate the cached inference URL from the current configuration.
    ///
    /// Runs eagerly at construction and after `load_model`, and again at
    /// the start of every classify call. The URL stays `None` until both
    /// name and version are known.
    fn regenerate_url(&mut self) {
        self.api_url = match (&self.config.name, &self.config.version) {
            (Some(_), Some(version)) => Some(endpoint::inference_url(
                &self.config.base_url,
                &self.slug,
                version,
                &self.config.api_key,
            )),
            _ => None,
        };
    }
}

impl fmt::Debug for ClassificationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationModel")
            .field("config", &self.config)
            .field("slug", &self.slug)
            .field("api_url", &self.api_url)
            .field("url_check", &self.url_check.name())
            .finish()
    }
}

impl fmt::Display for ClassificationModel {
    /// Small JSON object for debugging and logging. Not a stable
    /// serialization contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = serde_json::json!({
            "name": self.config.name,
            "version": self.config.version,
            "base_url": self.config.base_url,
        });
        match serde_json::to_string_pretty(&value) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => Err(fmt::Error),
        }
    }
}
