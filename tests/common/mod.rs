use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn callback_body(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("Failed to encode callback")
}

pub fn write_callbacks(bodies: &[String]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    for body in bodies {
        writeln!(file, "{}", body)?;
    }
    file.flush()?;
    Ok(file)
}
