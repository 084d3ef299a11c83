//! Runs the batch converter off the caller's thread.
//!
//! The converter itself is synchronous. Front ends with their own event loop
//! start it on tokio's blocking pool and receive [`ProgressEvent`]s over a
//! channel, so a slow image never stalls the UI.

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::debug;
use crate::core::{CancelToken, ChannelSink, ConversionRequest, ConversionSummary, ProgressEvent, ProgressSink};
use crate::processing::BatchConverter;
use crate::utils::{ConverterError, ConverterResult};

/// Starts a conversion on the blocking pool.
///
/// Events arrive on the returned receiver in emission order; the channel
/// closes once the run is over.
pub fn spawn_conversion(
    request: ConversionRequest,
    cancel: CancelToken,
) -> (JoinHandle<ConverterResult<ConversionSummary>>, UnboundedReceiver<ProgressEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::task::spawn_blocking(move || {
        let mut sink = ChannelSink::new(tx);
        BatchConverter::with_cancel(cancel).convert(&request, &mut sink)
    });
    (handle, rx)
}

/// Converts a folder in the background, relaying every event to `sink`.
pub async fn convert_folder(
    request: ConversionRequest,
    cancel: CancelToken,
    sink: &mut dyn ProgressSink,
) -> ConverterResult<ConversionSummary> {
    debug!("Dispatching conversion of {}", request.input_dir.display());
    let (handle, mut rx) = spawn_conversion(request, cancel);

    while let Some(event) = rx.recv().await {
        sink.emit(&event);
    }

    handle
        .await
        .map_err(|e| ConverterError::worker(format!("Conversion task panicked: {e}")))?
}
