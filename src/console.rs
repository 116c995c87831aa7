//! Line output to the operator's terminal sinks.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{ScbError, ScbResult};

/// Write `message` plus a newline and flush, so notices interleave with scan output.
pub async fn write_line<W>(sink: &mut W, message: &str) -> ScbResult<()>
where
    W: AsyncWrite + Unpin,
{
    sink.write_all(message.as_bytes()).await.map_err(ScbError::Output)?;
    sink.write_all(b"\n").await.map_err(ScbError::Output)?;
    sink.flush().await.map_err(ScbError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_line() {
        let mut sink = Vec::new();
        write_line(&mut sink, "Launching the scan").await.unwrap();
        write_line(&mut sink, "done").await.unwrap();
        assert_eq!(sink, b"Launching the scan\ndone\n");
    }
}
