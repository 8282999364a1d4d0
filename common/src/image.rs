//! Product images travel as base64 data URLs (`data:<mime>;base64,<payload>`).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("selected file is empty")]
    Empty,
    #[error("{0} is not an image type")]
    NotAnImage(String),
    #[error("not a base64 data URL")]
    MalformedDataUrl,
    #[error("invalid base64 payload: {0}")]
    Payload(String),
}

/// Guess an image MIME type from the file extension.
pub fn mime_from_file_name(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(mime)
}

/// Encode a selected file as a data URL.
///
/// The browser-reported content type wins; the extension is the fallback.
pub fn encode_image(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    let mime = content_type
        .filter(|ct| !ct.is_empty())
        .map(str::to_string)
        .or_else(|| mime_from_file_name(file_name).map(str::to_string))
        .unwrap_or_else(|| "application/octet-stream".to_string());
    if !mime.starts_with("image/") {
        return Err(ImageError::NotAnImage(mime));
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Split a data URL into its MIME type and decoded bytes.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>), ImageError> {
    let rest = url.strip_prefix("data:").ok_or(ImageError::MalformedDataUrl)?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or(ImageError::MalformedDataUrl)?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ImageError::Payload(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}
