//! Client for the Pictag hosted image-classification API.
//!
//! This crate wraps the classification endpoint behind a small client: it
//! builds the query-parameterized inference URL, encodes local images as
//! base64 JPEG payloads (or forwards hosted image URLs), dispatches one
//! HTTP call per classification, and parses the JSON response into a
//! [`pictag_models::PredictionGroup`].
//!
//! ```no_run
//! use pictag_client::{ClassificationModel, ClassifierConfig};
//!
//! # async fn run() -> pictag_client::ClientResult<()> {
//! let config = ClassifierConfig::new("api-key", "my-workspace/animals", false)
//!     .with_model("animals", "3");
//! let mut model = ClassificationModel::new(config)?;
//! let group = model.classify("photos/dog.jpg", false).await?;
//! println!("top class: {:?}", group.top);
//! # Ok(())
//! # }
//! ```

pub mod config;
mod endpoint;
pub mod error;
pub mod model;
pub mod probe;

pub use config::{ClassifierConfig, CLOUD_BASE_URL, LOCAL_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use model::ClassificationModel;
pub use probe::{HttpImageProbe, ImageUrlCheck};
