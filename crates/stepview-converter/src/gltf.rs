//! The `ModelConverter` implementation backed by the external tool.

use std::path::Path;

use async_trait::async_trait;
use tracing;
use uuid::Uuid;

use stepview_core::config::conversion::ConversionConfig;
use stepview_core::result::AppResult;
use stepview_core::traits::ModelConverter;

use crate::executor::{self, ExecutionParams};

/// STEP-to-glTF converter invoking the configured external command.
#[derive(Debug, Clone)]
pub struct GltfConverter {
    /// Conversion tool configuration.
    config: ConversionConfig,
}

impl GltfConverter {
    /// Create a new converter from configuration.
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ModelConverter for GltfConverter {
    async fn convert(&self, source: &Path, target: &Path, embed: bool) -> AppResult<()> {
        let job_id = format!("conv-{}", &Uuid::new_v4().to_string()[..8]);

        let mut args = executor::substitute_args(&self.config.args, source, target);
        if embed {
            args.extend(self.config.embed_args.iter().cloned());
        }

        let params = ExecutionParams {
            command: self.config.command.clone(),
            args,
            timeout_seconds: self.config.timeout_seconds,
            input_path: source.to_path_buf(),
            output_path: target.to_path_buf(),
        };

        tracing::debug!(job_id = %job_id, source = %source.display(), embed, "Starting conversion job");

        executor::execute(&params).await.map_err(|e| {
            tracing::error!(job_id = %job_id, error = %e, "Conversion job failed");
            e.into()
        })
    }
}
