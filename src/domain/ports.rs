use super::parameters::ParameterMap;
use crate::error::Result;

/// Renders the raw inbound callback for audit logging.
///
/// The rendering is opaque to the translator: it is stored on the response
/// as-is and never parsed back. Failures propagate unchanged.
pub trait RawResponseRecorder: Send + Sync {
    fn render_audit(&self, params: &ParameterMap) -> Result<String>;
}

/// Gateway settings the translator reads. Read-only.
pub trait GatewayConfiguration: Send + Sync {
    fn perform_authorize_and_capture(&self) -> bool;
}

pub type RawResponseRecorderBox = Box<dyn RawResponseRecorder>;
pub type GatewayConfigurationBox = Box<dyn GatewayConfiguration>;
