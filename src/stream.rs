//! Newline-delimited JSON streaming.
//!
//! Streaming endpoints emit one JSON document per line and send blank lines as
//! keep-alives. Network chunks do not line up with documents, so bytes are buffered
//! until a full line is available; a document is never decoded from a partial chunk.

// std
use std::collections::VecDeque;
// crates.io
use reqwest::Response;
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	error::TransportError,
	response,
};

/// Longest line buffered while waiting for a newline.
pub const MAX_LINE_BYTES: usize = 16 * 1024 * 1024;

/// Incremental splitter that turns arbitrary byte chunks into JSON values.
///
/// Bytes already searched for a newline are not searched again, so a long line split
/// over many chunks is scanned once. A line that outgrows the limit yields one
/// [`TransportError::LineTooLong`] and is dropped up to its newline.
#[derive(Clone, Debug)]
pub struct JsonLineDecoder {
	buffer: Vec<u8>,
	scanned: usize,
	discarding: bool,
	limit: usize,
	status: Option<u16>,
}
impl JsonLineDecoder {
	/// Creates a decoder whose errors carry the given HTTP status.
	pub fn with_status(status: u16) -> Self {
		Self { status: Some(status), ..Default::default() }
	}

	/// Overrides the per-line buffering limit.
	pub fn max_line_bytes(mut self, limit: usize) -> Self {
		self.limit = limit;

		self
	}

	/// Feeds a chunk and returns every document completed by it.
	pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<Value>> {
		self.buffer.extend_from_slice(chunk);

		let mut decoded = Vec::new();

		while let Some(offset) = self.buffer[self.scanned..].iter().position(|&b| b == b'\n') {
			let line = self.buffer.drain(..=self.scanned + offset).collect::<Vec<_>>();

			self.scanned = 0;

			if std::mem::take(&mut self.discarding) {
				continue;
			}
			if let Some(item) = self.decode_line(&line) {
				decoded.push(item);
			}
		}

		if self.buffer.len() > self.limit {
			self.buffer.clear();

			if !self.discarding {
				self.discarding = true;

				decoded.push(Err(TransportError::LineTooLong { limit: self.limit }.into()));
			}
		}

		self.scanned = self.buffer.len();

		decoded
	}

	/// Flushes a trailing document that was not newline-terminated.
	pub fn finish(&mut self) -> Option<Result<Value>> {
		let line = std::mem::take(&mut self.buffer);

		self.scanned = 0;

		if std::mem::take(&mut self.discarding) {
			return None;
		}

		self.decode_line(&line)
	}

	/// Number of buffered bytes still waiting for a newline.
	pub fn pending(&self) -> usize {
		self.buffer.len()
	}

	fn decode_line(&self, line: &[u8]) -> Option<Result<Value>> {
		let line = line.trim_ascii();

		if line.is_empty() {
			return None;
		}

		Some(response::decode_json(line, self.status))
	}
}
impl Default for JsonLineDecoder {
	fn default() -> Self {
		Self { buffer: Vec::new(), scanned: 0, discarding: false, limit: MAX_LINE_BYTES, status: None }
	}
}

/// Streamed response body yielding one JSON value per line.
///
/// A malformed or oversized line yields one error item and reading continues; a network
/// failure yields one error and ends the stream.
pub struct JsonStream {
	response: Response,
	decoder: JsonLineDecoder,
	ready: VecDeque<Result<Value>>,
	done: bool,
}
impl JsonStream {
	pub(crate) fn new(response: Response) -> Self {
		let decoder = JsonLineDecoder::with_status(response.status().as_u16());

		Self { response, decoder, ready: VecDeque::new(), done: false }
	}

	/// Waits for the next document; `None` once the body is exhausted.
	pub async fn next(&mut self) -> Option<Result<Value>> {
		loop {
			if let Some(item) = self.ready.pop_front() {
				return Some(item);
			}
			if self.done {
				return None;
			}

			match self.response.chunk().await {
				Ok(Some(chunk)) => self.ready.extend(self.decoder.push(&chunk)),
				Ok(None) => {
					self.done = true;
					self.ready.extend(self.decoder.finish());
				},
				Err(e) => {
					self.done = true;

					return Some(Err(TransportError::from(e).into()));
				},
			}
		}
	}

	/// Drains the stream, failing on the first bad item.
	pub async fn collect(mut self) -> Result<Vec<Value>> {
		let mut values = Vec::new();

		while let Some(item) = self.next().await {
			values.push(item?);
		}

		Ok(values)
	}
}
impl Debug for JsonStream {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("JsonStream")
			.field("status", &self.response.status().as_u16())
			.field("pending_bytes", &self.decoder.pending())
			.field("done", &self.done)
			.finish()
	}
}
