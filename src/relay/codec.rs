//! Wire codec for the relay protocol.
//!
//! A message travels as one `application/x-www-form-urlencoded` line,
//! `username=<pct>&message=<pct>`, terminated by `\n`. Percent-encoding
//! escapes every raw newline inside values, so the line delimiter is
//! unambiguous and one line is always one logical message.
//!
//! Decoding is permissive the way query-string parsing is permissive:
//! a missing key degrades to an empty field and a repeated key takes its
//! first occurrence. The only hard failure is a frame that is not valid
//! UTF-8 text.

use url::form_urlencoded;

use crate::relay::message::Message;
use crate::utils::error::DecodeError;

/// Upper bound on a single encoded frame, delimiter included. Longer frames
/// are dropped by the server instead of being silently truncated.
pub const MAX_FRAME_LEN: usize = 64 * 1024;

/// Encode a message as a form-urlencoded body (no trailing delimiter).
pub fn encode(msg: &Message) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("username", &msg.username)
        .append_pair("message", &msg.message)
        .finish()
}

/// Decode a frame back into a `Message`.
///
/// Fields missing from the body come back as empty strings; the caller
/// decides whether an incomplete message is worth keeping.
pub fn decode(bytes: &[u8]) -> Result<Message, DecodeError> {
    let text = std::str::from_utf8(bytes)?;

    let mut username = None;
    let mut message = None;
    for (key, value) in form_urlencoded::parse(text.as_bytes()) {
        match key.as_ref() {
            "username" if username.is_none() => username = Some(value.into_owned()),
            "message" if message.is_none() => message = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(Message {
        username: username.unwrap_or_default(),
        message: message.unwrap_or_default(),
    })
}
