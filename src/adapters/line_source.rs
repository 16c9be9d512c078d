use crate::domain::ports::CandidateSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// One candidate per line from an async reader.
///
/// This is the shape a decoder feed takes once it leaves the device layer:
/// each decoded string arrives as a line, whenever the decoder produces it.
pub struct LineSource<R: AsyncBufRead + Unpin + Send> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> CandidateSource for LineSource<R> {
    async fn next_candidate(&mut self) -> Result<Option<String>> {
        let line = self.lines.next_line().await?;
        Ok(line)
    }
}
