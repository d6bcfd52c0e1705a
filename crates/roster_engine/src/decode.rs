use roster_core::Item;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload is not a roster list: {message}")]
    InvalidPayload { message: String },
    #[error("payload of {actual} bytes exceeds the {max_bytes} byte decode limit")]
    Oversized { max_bytes: u64, actual: u64 },
}

/// Decode a response body into wire items.
///
/// The body must be a JSON array of `{ id, listId, name }` objects. A `null`
/// or missing `name` decodes to an absent label; unknown fields are ignored.
/// Anything else (an object at the top level, an element without `id` or
/// `listId`) is an `InvalidPayload` carrying the decoder's message.
pub fn decode_items(bytes: &[u8]) -> Result<Vec<Item>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidPayload {
        message: err.to_string(),
    })
}
