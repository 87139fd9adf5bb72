//! Image Attachments
//!
//! Uploaded images travel inside JSON as full data URLs:
//! `data:<mime>;base64,<payload>`.

use std::future::Future;

use base64::Engine;

/// MIME type assumed when the browser reports none
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// An image file read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// A blank `mime` falls back to [`DEFAULT_IMAGE_MIME`].
    pub fn new(name: impl Into<String>, mime: &str, bytes: Vec<u8>) -> Self {
        let mime = mime.trim();
        Self {
            name: name.into(),
            mime: if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime }.to_string(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_data_url(&self) -> String {
        encode_data_url(&self.mime, &self.bytes)
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{payload}")
}

/// Finish reading the attached file, if any, and encode it. Called when the
/// user submits, so the payload always matches the file selected at that
/// moment. No attachment is sent as JSON `null`.
pub async fn read_attachment<F, E>(read: Option<F>) -> Result<Option<String>, E>
where
    F: Future<Output = Result<ImageUpload, E>>,
{
    let Some(read) = read else {
        return Ok(None);
    };
    let upload = read.await?;
    tracing::debug!(
        name = upload.name(),
        mime = upload.mime(),
        bytes = upload.len(),
        "image attached"
    );
    Ok(Some(upload.to_data_url()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_bytes_encode_exactly() {
        let upload = ImageUpload::new("cat.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(upload.to_data_url(), "data:image/jpeg;base64,/9j/4A==");
    }

    #[test]
    fn unknown_mime_defaults_to_png() {
        let upload = ImageUpload::new("blob", "", b"hi".to_vec());
        assert_eq!(upload.mime(), "image/png");
        assert_eq!(upload.to_data_url(), "data:image/png;base64,aGk=");
    }

    #[tokio::test]
    async fn missing_file_gives_none() {
        let none: Option<std::future::Ready<Result<ImageUpload, String>>> = None;
        assert_eq!(read_attachment(none).await, Ok(None));
    }

    #[tokio::test]
    async fn slow_read_is_awaited_before_payload_is_built() {
        let read = async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            tokio::task::yield_now().await;
            Ok::<_, String>(ImageUpload::new("a.gif", "image/gif", Vec::new()))
        };
        let payload = read_attachment(Some(read)).await.unwrap();
        assert_eq!(payload.as_deref(), Some("data:image/gif;base64,"));
    }

    #[tokio::test]
    async fn failed_read_is_reported() {
        let read = std::future::ready(Err::<ImageUpload, _>("unreadable".to_string()));
        assert_eq!(read_attachment(Some(read)).await, Err("unreadable".to_string()));
    }

    #[test]
    fn empty_file_still_encodes() {
        let upload = ImageUpload::new("a.gif", "image/gif", Vec::new());
        assert!(upload.is_empty());
        assert_eq!(upload.to_data_url(), "data:image/gif;base64,");
    }
}
