//! One-shot relay client.
//!
//! The web process opens a fresh connection per submission, writes a single
//! encoded frame and lets the stream close on drop. There is no response
//! channel and no retry: the relay is fire-and-forget, and the caller is
//! expected to log a failure rather than surface it to the browser.

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::relay::codec;
use crate::relay::message::Message;
use crate::utils::error::RelayError;

/// Send one message to the relay server at `addr`.
pub async fn send(addr: &str, msg: &Message) -> Result<(), RelayError> {
    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|e| RelayError::Unreachable {
            addr: addr.to_string(),
            source: e,
        })?;

    let mut frame = codec::encode(msg).into_bytes();
    frame.push(b'\n');
    stream.write_all(&frame).await?;

    Ok(())
}
