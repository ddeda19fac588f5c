//! Size-bounded body reading
//!
//! The body is pulled chunk by chunk. As soon as the running total would pass the
//! cap, reading stops and the partial buffer is dropped, so a server that omits
//! or understates `Content-Length` can never make us hold more than `limit` bytes.

use futures::{Stream, StreamExt};
use tracing::warn;

use super::types::FetchError;

/// Reject a response up front when its declared length is already over the cap
pub(crate) fn check_declared_length(declared: Option<u64>, limit: u64) -> Result<(), FetchError> {
    match declared {
        Some(declared) if declared > limit => {
            warn!("SECURITY: Content too large: {declared} bytes (max {limit})");
            Err(FetchError::DeclaredTooLarge { declared, limit })
        }
        _ => Ok(()),
    }
}

/// Collect a byte stream into memory, failing once more than `limit` bytes arrive
pub(crate) async fn collect_bounded<S, B>(
    stream: S,
    size_hint: Option<u64>,
    limit: u64,
) -> Result<Vec<u8>, FetchError>
where
    S: Stream<Item = Result<B, reqwest::Error>>,
    B: AsRef<[u8]>,
{
    let capacity = size_hint.unwrap_or(0).min(limit);
    let mut buffer = Vec::with_capacity(usize::try_from(capacity).unwrap_or(0));
    let mut stream = std::pin::pin!(stream);
    let mut total: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Transport)?;
        let chunk = chunk.as_ref();

        // Check BEFORE accumulating
        total = total.saturating_add(chunk.len() as u64);
        if total > limit {
            warn!("SECURITY: Content exceeded size limit ({limit} bytes) mid-stream");
            return Err(FetchError::ExceededLimit { limit });
        }

        buffer.extend_from_slice(chunk);
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn chunks(sizes: &[usize]) -> impl Stream<Item = Result<Vec<u8>, reqwest::Error>> {
        stream::iter(sizes.iter().map(|&n| Ok(vec![b'x'; n])).collect::<Vec<_>>())
    }

    #[tokio::test]
    async fn test_collects_body_within_limit() {
        let body = collect_bounded(chunks(&[10, 20, 30]), None, 60).await.unwrap();
        assert_eq!(body.len(), 60);
    }

    #[tokio::test]
    async fn test_aborts_when_stream_passes_limit() {
        let err = collect_bounded(chunks(&[40, 40, 40]), Some(10), 60).await.unwrap_err();
        assert!(matches!(err, FetchError::ExceededLimit { limit: 60 }));
    }

    #[tokio::test]
    async fn test_stops_pulling_after_overflow() {
        let pulled = std::sync::atomic::AtomicUsize::new(0);
        let source = stream::iter(0..100).map(|_| {
            pulled.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok::<_, reqwest::Error>(vec![0u8; 16])
        });
        assert!(collect_bounded(source, None, 32).await.is_err());
        assert_eq!(pulled.load(std::sync::atomic::Ordering::SeqCst), 3);
    }

    #[test]
    fn test_declared_length_check() {
        assert!(check_declared_length(None, 10).is_ok());
        assert!(check_declared_length(Some(10), 10).is_ok());
        let err = check_declared_length(Some(11), 10).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
