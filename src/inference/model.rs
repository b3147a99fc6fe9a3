//! Model abstraction and the ONNX Runtime implementation.

use crate::config::InferenceDevice;
use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use ndarray::ArrayView4;
use ort::session::Session;
use ort::value::TensorRef;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

/// Forward-pass capability required from a loaded classification model.
///
/// Implementations take a single-example batch of shape `[1, H, W, 3]` and
/// return the final layer's raw class-score vector (assumed to already be
/// softmax-normalized to [0,1]). All framework internals stay behind this
/// trait.
pub trait Model: Send {
    /// Run the forward computation on a prepared input tensor.
    fn forward(&self, input: ArrayView4<'_, f32>) -> Result<Vec<f32>>;
}

/// ONNX Runtime backed model.
///
/// The session is not documented as reentrant, so it sits behind a mutex;
/// concurrent callers serialize on the forward pass.
pub struct OrtModel {
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
}

impl OrtModel {
    /// Load a model artifact from disk.
    pub fn load(path: &Path, device: InferenceDevice) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ModelFileNotFound {
                path: path.to_path_buf(),
            });
        }

        ort::init().with_name(APP_NAME).commit();

        let builder = Session::builder().map_err(|e| load_error(path, e))?;
        let mut builder = configure_device(builder, device, path)?;

        let session = builder
            .commit_from_file(path)
            .map_err(|e| load_error(path, e))?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| load_error(path, "model has no inputs"))?;
        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| load_error(path, "model has no outputs"))?;

        debug!(
            "Loaded ONNX session: input '{}', output '{}'",
            input_name, output_name
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}

/// Apply the requested inference device to the session builder.
#[cfg(feature = "cuda")]
fn configure_device(
    builder: ort::session::builder::SessionBuilder,
    device: InferenceDevice,
    path: &Path,
) -> Result<ort::session::builder::SessionBuilder> {
    use ort::execution_providers::{CPUExecutionProvider, CUDAExecutionProvider};

    match device {
        InferenceDevice::Cpu => {
            info!("Requested device: CPU");
            Ok(builder)
        }
        InferenceDevice::Auto | InferenceDevice::Gpu => {
            info!("Requested device: CUDA (CPU fallback)");
            builder
                .with_execution_providers([
                    CUDAExecutionProvider::default().build(),
                    CPUExecutionProvider::default().build(),
                ])
                .map_err(|e| load_error(path, e))
        }
    }
}

/// Apply the requested inference device to the session builder.
#[cfg(not(feature = "cuda"))]
fn configure_device(
    builder: ort::session::builder::SessionBuilder,
    device: InferenceDevice,
    _path: &Path,
) -> Result<ort::session::builder::SessionBuilder> {
    use tracing::warn;

    match device {
        InferenceDevice::Gpu => {
            warn!("GPU requested but this build has no CUDA support, using CPU");
        }
        InferenceDevice::Auto | InferenceDevice::Cpu => {
            info!("Requested device: CPU");
        }
    }
    Ok(builder)
}

impl Model for OrtModel {
    #[allow(clippy::cast_possible_wrap)]
    fn forward(&self, input: ArrayView4<'_, f32>) -> Result<Vec<f32>> {
        let dims: Vec<i64> = input.shape().iter().map(|&d| d as i64).collect();
        let data = input.as_slice().ok_or_else(|| Error::Inference {
            reason: "input tensor is not contiguous".to_string(),
        })?;

        let tensor = TensorRef::from_array_view((dims, data)).map_err(|e| Error::Inference {
            reason: e.to_string(),
        })?;

        let mut session = self.session.lock().map_err(|_| Error::Inference {
            reason: "model session lock poisoned".to_string(),
        })?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => tensor])
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        let (_, scores) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference {
                reason: e.to_string(),
            })?;

        Ok(scores.to_vec())
    }
}

/// Wrap an artifact load failure with its path.
fn load_error(
    path: &Path,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> Error {
    Error::ModelLoad {
        path: path.to_path_buf(),
        source: source.into(),
    }
}
