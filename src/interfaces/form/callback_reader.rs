use crate::domain::parameters::ParameterMap;
use crate::error::{PaymentError, Result};
use std::io::{BufRead, BufReader, Read};

/// Reads gateway callbacks encoded as `application/x-www-form-urlencoded`.
///
/// Repeated keys are kept in submission order, so `RESULT_SUCCESS=false&RESULT_SUCCESS=true`
/// decodes to two values under one field.
pub struct CallbackReader<R: Read> {
    source: R,
}

impl<R: Read> CallbackReader<R> {
    /// Creates a new `CallbackReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Reads the whole source as a single callback body.
    pub fn read_callback(mut self) -> Result<ParameterMap> {
        let mut body = String::new();
        self.source.read_to_string(&mut body)?;
        decode(&body)
    }

    /// Returns an iterator that lazily decodes one callback per non-blank line.
    pub fn callbacks(self) -> impl Iterator<Item = Result<ParameterMap>> {
        BufReader::new(self.source)
            .lines()
            .filter(|line| line.as_ref().ok().is_none_or(|line| !line.trim().is_empty()))
            .map(|line| line.map_err(PaymentError::from).and_then(|line| decode(&line)))
    }
}

/// Decodes a single form-encoded body. Surrounding whitespace is ignored.
pub fn decode(body: &str) -> Result<ParameterMap> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body.trim())?;
    Ok(pairs.into_iter().collect())
}
