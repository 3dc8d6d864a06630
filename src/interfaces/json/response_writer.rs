use crate::domain::response::PaymentResponse;
use crate::error::Result;
use std::io::Write;

/// Writes translated responses as JSON, one document per line unless pretty
/// printing is enabled.
pub struct ResponseWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    pub fn write_response(&mut self, response: &PaymentResponse) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, response)?;
        } else {
            serde_json::to_writer(&mut self.writer, response)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
