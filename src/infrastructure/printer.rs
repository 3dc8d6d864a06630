use crate::domain::parameters::ParameterMap;
use crate::domain::ports::RawResponseRecorder;
use crate::error::Result;

/// Renders a callback as a plain-text parameter dump.
///
/// ```text
/// Parameters:
/// ORDER_ID: ORD-1
/// RESULT_SUCCESS: false, true
/// ```
///
/// Fields are listed in key order; repeated values are comma-separated.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextResponsePrinter;

impl RawResponseRecorder for TextResponsePrinter {
    fn render_audit(&self, params: &ParameterMap) -> Result<String> {
        let mut rendered = String::from("Parameters:\n");
        for (name, values) in params.iter() {
            rendered.push_str(&format!("{}: {}\n", name, values.join(", ")));
        }
        Ok(rendered)
    }
}

/// Renders a callback as a JSON object of value arrays.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonResponsePrinter;

impl RawResponseRecorder for JsonResponsePrinter {
    fn render_audit(&self, params: &ParameterMap) -> Result<String> {
        Ok(serde_json::to_string(params)?)
    }
}
