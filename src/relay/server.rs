//! Relay server
//!
//! This module implements the persistence-facing half of the relay.
//! Responsibilities:
//! - Accept TCP connections from the web process
//! - Read newline-delimited frames from each connection until EOF
//! - Decode frames and drop incomplete or undecodable messages
//! - Forward complete messages to a single writer task that owns the
//!   document store handle and serializes all inserts
//!
//! Concurrency notes:
//! - Each accepted connection is handled in its own task, so one slow or
//!   hung peer cannot stall other submissions.
//! - The store handle is owned exclusively by the writer task; handler
//!   tasks reach it only through the mpsc channel, so no locking is needed
//!   around inserts.
//! - A failed insert is retried a bounded number of times before the record
//!   is dropped; store trouble never takes the accept loop down.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::relay::codec;
use crate::relay::message::{Message, Record};
use crate::store::DocumentStore;

/// Maximum number of insert retries before a record is dropped.
///
/// This keeps a flaky store from wedging the writer on a single record.
pub const MAX_INSERT_RETRIES: u8 = 3;

/// Delay between insert retries.
const RETRY_DELAY_MS: u64 = 500;

/// Bind the relay listener and run the accept loop.
///
/// Returns only on a listener error; bind failure is left to the caller,
/// where it is fatal at startup.
pub async fn start_relay_server(
    addr: String,
    store: Box<dyn DocumentStore>,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(&addr).await?;
    info!("Relay server listening on {addr}");

    let (tx, rx) = mpsc::unbounded_channel::<Message>();
    tokio::spawn(store_writer(rx, store));

    loop {
        let (stream, peer) = listener.accept().await?;
        info!("Connection from {peer}");
        let tx = tx.clone();
        tokio::spawn(async move {
            handle_connection(stream, tx).await;
            info!("Connection from {peer} closed");
        });
    }
}

/// Read frames from one connection until the peer closes it.
async fn handle_connection(stream: TcpStream, tx: mpsc::UnboundedSender<Message>) {
    let mut reader = BufReader::new(stream);
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(n) if n > codec::MAX_FRAME_LEN => {
                warn!("Dropping oversized frame of {n} bytes");
            }
            Ok(_) => {
                let frame = trim_delimiter(&buf);
                match codec::decode(frame) {
                    Ok(msg) if msg.is_complete() => {
                        if tx.send(msg).is_err() {
                            // Writer is gone; nothing left to forward to.
                            break;
                        }
                    }
                    Ok(msg) => {
                        warn!(
                            username = %msg.username,
                            "Received empty username or message, dropping"
                        );
                    }
                    Err(e) => {
                        // Decode errors are non-fatal; keep reading.
                        warn!("Error processing frame: {e}");
                    }
                }
            }
            Err(e) => {
                warn!("Read error: {e}");
                break;
            }
        }
    }
}

fn trim_delimiter(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Single writer that owns the store and serializes all inserts.
async fn store_writer(mut rx: mpsc::UnboundedReceiver<Message>, store: Box<dyn DocumentStore>) {
    while let Some(msg) = rx.recv().await {
        let record = Record::from_message(msg);

        let mut attempt: u8 = 0;
        loop {
            match store.insert(&record) {
                Ok(()) => {
                    info!(username = %record.username, "Saved message to store");
                    break;
                }
                Err(e) if attempt < MAX_INSERT_RETRIES => {
                    attempt += 1;
                    warn!("Insert failed (attempt {attempt}): {e}");
                    tokio::time::sleep(tokio::time::Duration::from_millis(RETRY_DELAY_MS)).await;
                }
                Err(e) => {
                    error!("Dropping record after {MAX_INSERT_RETRIES} retries: {e}");
                    break;
                }
            }
        }
    }
}
