use async_trait::async_trait;

use crate::error::Result;

/// One concrete representation an attachment can offer.
///
/// A single attachment may conform to several of these at once; a shared
/// web page often offers both a URL and a textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    Text,
    Url,
    Image,
}

/// Raw image payload handed over by the host, plus the content type it
/// advertised (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }
}

/// One item of content offered by the sharing application.
///
/// Implemented by the host's platform bridge. Each load is an independent
/// suspension point; a failed or unsupported load must leave the other
/// representations unaffected and must never block the caller.
#[async_trait]
pub trait Attachment: Send + Sync {
    /// Whether this attachment can produce the given representation.
    fn conforms_to(&self, repr: Representation) -> bool;

    async fn load_text(&self) -> Result<String>;

    async fn load_url(&self) -> Result<String>;

    async fn load_image(&self) -> Result<ImageData>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::IntakeError;

    /// Canned attachment for driving the resolver and session in tests.
    #[derive(Debug, Default, Clone)]
    pub struct StubAttachment {
        pub text: Option<String>,
        pub url: Option<String>,
        pub image: Option<ImageData>,
        pub fail_text: bool,
        pub fail_url: bool,
        pub fail_image: bool,
    }

    impl StubAttachment {
        pub fn text(value: &str) -> Self {
            Self {
                text: Some(value.to_string()),
                ..Default::default()
            }
        }

        pub fn url(value: &str) -> Self {
            Self {
                url: Some(value.to_string()),
                ..Default::default()
            }
        }

        pub fn image(bytes: &[u8], content_type: Option<&str>) -> Self {
            Self {
                image: Some(ImageData::new(
                    bytes.to_vec(),
                    content_type.map(str::to_string),
                )),
                ..Default::default()
            }
        }

        pub fn with_text(mut self, value: &str) -> Self {
            self.text = Some(value.to_string());
            self
        }

        pub fn with_url(mut self, value: &str) -> Self {
            self.url = Some(value.to_string());
            self
        }
    }

    #[async_trait]
    impl Attachment for StubAttachment {
        fn conforms_to(&self, repr: Representation) -> bool {
            match repr {
                Representation::Text => self.text.is_some() || self.fail_text,
                Representation::Url => self.url.is_some() || self.fail_url,
                Representation::Image => self.image.is_some() || self.fail_image,
            }
        }

        async fn load_text(&self) -> Result<String> {
            if self.fail_text {
                return Err(IntakeError::AttachmentLoad("text load failed".into()));
            }
            self.text
                .clone()
                .ok_or(IntakeError::UnsupportedRepresentation)
        }

        async fn load_url(&self) -> Result<String> {
            if self.fail_url {
                return Err(IntakeError::AttachmentLoad("url load failed".into()));
            }
            self.url
                .clone()
                .ok_or(IntakeError::UnsupportedRepresentation)
        }

        async fn load_image(&self) -> Result<ImageData> {
            if self.fail_image {
                return Err(IntakeError::AttachmentLoad("image load failed".into()));
            }
            self.image
                .clone()
                .ok_or(IntakeError::UnsupportedRepresentation)
        }
    }
}
