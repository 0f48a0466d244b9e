use tracing::debug;

use crate::attachment::{Attachment, Representation};
use crate::share::record::PartialContent;

/// Resolve every representation the attachment conforms to and merge the
/// successful values into one partial result.
///
/// The loads run concurrently; each is its own suspension point. A failed
/// or unsupported representation leaves its field absent and never fails
/// the resolution as a whole.
pub async fn resolve(attachment: &dyn Attachment) -> PartialContent {
    let text = async {
        if !attachment.conforms_to(Representation::Text) {
            return None;
        }
        match attachment.load_text().await {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("Text representation failed to load: {}", e);
                None
            }
        }
    };

    let url = async {
        if !attachment.conforms_to(Representation::Url) {
            return None;
        }
        match attachment.load_url().await {
            Ok(url) => Some(url),
            Err(e) => {
                debug!("URL representation failed to load: {}", e);
                None
            }
        }
    };

    let image = async {
        if !attachment.conforms_to(Representation::Image) {
            return None;
        }
        match attachment.load_image().await {
            Ok(image) => Some(image),
            Err(e) => {
                debug!("Image representation failed to load: {}", e);
                None
            }
        }
    };

    let (text, url, image) = tokio::join!(text, url, image);
    PartialContent { text, url, image }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::testing::StubAttachment;

    #[tokio::test]
    async fn test_merges_every_conforming_representation() {
        let attachment = StubAttachment::url("https://example.com").with_text("a page");

        let partial = resolve(&attachment).await;

        assert_eq!(partial.url.as_deref(), Some("https://example.com"));
        assert_eq!(partial.text.as_deref(), Some("a page"));
        assert!(partial.image.is_none());
    }

    #[tokio::test]
    async fn test_failed_load_leaves_field_absent() {
        let attachment = StubAttachment {
            text: Some("still here".to_string()),
            fail_url: true,
            ..Default::default()
        };

        let partial = resolve(&attachment).await;

        assert_eq!(partial.text.as_deref(), Some("still here"));
        assert!(partial.url.is_none());
    }

    #[tokio::test]
    async fn test_nothing_conforms_resolves_empty() {
        let partial = resolve(&StubAttachment::default()).await;
        assert!(partial.is_empty());
    }

    #[tokio::test]
    async fn test_image_bytes_and_content_type_pass_through() {
        let attachment = StubAttachment::image(&[0x89, 0x50, 0x4e, 0x47], Some("image/png"));

        let partial = resolve(&attachment).await;

        let image = partial.image.expect("image should resolve");
        assert_eq!(image.bytes, vec![0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(image.content_type.as_deref(), Some("image/png"));
    }
}
