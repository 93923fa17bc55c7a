use std::borrow::Cow;

/// Converts escaped post text into display text
pub trait EntityDecoder {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Decodes the three entities post exports escape: `&lt;`, `&gt;` and `&amp;`.
///
/// `&amp;` goes last so `&amp;lt;` decodes to the literal `&lt;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEntities;

impl EntityDecoder for BasicEntities {
    fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.contains('&') {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&"))
    }
}
