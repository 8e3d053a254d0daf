//! Configuration for the external CAD conversion tool.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for the STEP-to-glTF converter invocation.
///
/// The converter is an external executable; `args` is a template where
/// `{input}` and `{output}` are replaced with the source and target
/// paths before the process is spawned.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// The conversion command to execute.
    pub command: String,

    /// Argument template passed to the command.
    pub args: Vec<String>,

    /// Whether binary buffer data is inlined into the glTF output.
    /// When false the output references external buffer files.
    pub embed: bool,

    /// Extra arguments appended when `embed` is enabled.
    pub embed_args: Vec<String>,

    /// Timeout in seconds for a single converter invocation.
    #[validate(range(min = 1, max = 7200))]
    pub timeout_seconds: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            command: "step2gltf".to_string(),
            args: vec!["{input}".to_string(), "{output}".to_string()],
            embed: false,
            embed_args: vec!["--embed".to_string()],
            timeout_seconds: 300,
        }
    }
}
