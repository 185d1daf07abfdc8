/// Longest raw-body excerpt shown when a response is not JSON.
pub const MAX_PREVIEW_CHARS: usize = 500;

/// First `MAX_PREVIEW_CHARS` characters of `body`. Counts characters, not
/// bytes, so multi-byte text is never split.
pub fn truncate_preview(body: &str) -> String {
    match body.char_indices().nth(MAX_PREVIEW_CHARS) {
        Some((idx, _)) => body[..idx].to_string(),
        None => body.to_string(),
    }
}
