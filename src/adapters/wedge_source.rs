use crate::core::keypad::{Key, KeyBuffer};
use crate::domain::ports::CandidateSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Candidate source over a raw keystroke byte stream.
///
/// Physical scanners in keyboard-wedge mode type the code and terminate it
/// with Enter ('\n' or '\r'). Every byte is routed through a `KeyBuffer`;
/// a candidate surfaces only when the terminator arrives.
pub struct WedgeSource<R: AsyncRead + Unpin + Send> {
    reader: R,
    buffer: KeyBuffer,
}

impl<R: AsyncRead + Unpin + Send> WedgeSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: KeyBuffer::new(),
        }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> CandidateSource for WedgeSource<R> {
    async fn next_candidate(&mut self) -> Result<Option<String>> {
        let mut byte = [0u8; 1];
        loop {
            let n = self.reader.read(&mut byte).await?;
            if n == 0 {
                // Stream closed with no terminator: partial input is stale,
                // not a candidate.
                self.buffer.clear();
                return Ok(None);
            }

            let key = match byte[0] {
                b'\n' | b'\r' => Key::Enter,
                b => Key::Char(b as char),
            };
            if let Some(candidate) = self.buffer.press(key) {
                return Ok(Some(candidate));
            }
        }
    }
}
