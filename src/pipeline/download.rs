//! Streaming download of artifact archives.
//!
//! Archives can run to gigabytes, so the response body is streamed to disk
//! chunk by chunk and never buffered whole. The caller observes progress via
//! a cumulative byte counter invoked once per received chunk.

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::error::{Result, UploaderError};
use crate::teamcity::TeamCityClient;

/// Download `url` to `target`, reporting cumulative bytes after each chunk.
///
/// The target's parent directory is created if needed. Non-2xx responses are
/// errors. No retries, no resume, no checksum verification.
pub async fn download<F>(
    client: &TeamCityClient,
    url: &str,
    target: &Path,
    on_progress: F,
) -> Result<()>
where
    F: FnMut(u64),
{
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let response = client.get(url).send().await?.error_for_status()?;
    write_stream(response.bytes_stream(), target, on_progress).await
}

/// Write a chunk stream to `target`, invoking `on_progress` per chunk.
///
/// Factored out of [`download`] so the sink can be exercised against an
/// in-memory stream.
pub(crate) async fn write_stream<S, E, F>(mut stream: S, target: &Path, mut on_progress: F) -> Result<()>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: Into<UploaderError>,
    F: FnMut(u64),
{
    let mut file = tokio::fs::File::create(target).await?;
    let mut total: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(Into::into)?;
        total += chunk.len() as u64;
        on_progress(total);
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(())
}
