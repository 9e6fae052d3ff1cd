use crate::export::{self, DocumentEncoder, DocumentTable};
use crate::{Error, Result};
use log::{debug, warn};
use std::sync::mpsc::{self, Sender};
use std::thread;
use tokio::sync::oneshot;

enum Command {
    Encode(DocumentTable, oneshot::Sender<Result<Vec<u8>>>),
    Close(oneshot::Sender<()>),
}

/// An async-friendly document exporter backed by a dedicated worker thread.
///
/// The worker owns the encoder and runs encodes one at a time, so async
/// callers can await an export without blocking their executor.
#[derive(Clone)]
pub struct Exporter {
    cmd_tx: Sender<Command>,
    extension: &'static str,
    mime_type: &'static str,
}

impl Exporter {
    /// Spawn a worker with the default encoder.
    pub fn new() -> Self {
        Self::with_encoder(export::new_encoder())
    }

    /// Spawn a worker that owns `encoder`.
    pub fn with_encoder(encoder: Box<dyn DocumentEncoder>) -> Self {
        let extension = encoder.extension();
        let mime_type = encoder.mime_type();
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Encode(table, resp) => {
                        let res = encoder.encode(&table);
                        if resp.send(res).is_err() {
                            warn!("export requester went away before the document was ready");
                        }
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(());
                        break;
                    }
                }
            }
            debug!("export worker stopped");
        });

        Self {
            cmd_tx,
            extension,
            mime_type,
        }
    }

    pub fn extension(&self) -> &'static str {
        self.extension
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Encode a table on the worker and wait for the document bytes.
    pub async fn export(&self, table: DocumentTable) -> Result<Vec<u8>> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Encode(table, tx))
            .map_err(|_| Error::Other("Export worker is not running".to_string()))?;
        rx.await
            .map_err(|e| Error::Other(format!("Export canceled: {}", e)))?
    }

    /// Stop the worker. Other clones of this exporter stop working too.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Close(tx))
            .map_err(|_| Error::Other("Export worker is not running".to_string()))?;
        rx.await
            .map_err(|e| Error::Other(format!("Worker close canceled: {}", e)))
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
