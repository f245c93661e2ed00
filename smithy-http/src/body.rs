/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests and for holding all HTTP responses
/// once they have been read off the wire. The JSON protocols never stream, so the body is
/// always a single chunk of bytes.
pub struct SdkBody {
    inner: Inner,
    // Retained so that the body can be cloned (or re-read for signing) after it has been polled
    retained: Option<Bytes>,
}

enum Inner {
    Once(Option<Bytes>),
    Taken,
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Once(Some(bytes)) => f
                .debug_tuple("SdkBody::Once")
                .field(&String::from_utf8_lossy(bytes))
                .finish(),
            Inner::Once(None) => f.write_str("SdkBody::Once(<consumed>)"),
            Inner::Taken => f.write_str("SdkBody::Taken"),
        }
    }
}

impl SdkBody {
    /// Construct an empty body
    pub fn empty() -> Self {
        Self::from_bytes(Bytes::new())
    }

    /// A body whose content has been moved elsewhere, used as a placeholder in `mem::replace`
    pub fn taken() -> Self {
        SdkBody {
            inner: Inner::Taken,
            retained: None,
        }
    }

    fn from_bytes(bytes: Bytes) -> Self {
        SdkBody {
            inner: Inner::Once(Some(bytes.clone())),
            retained: Some(bytes),
        }
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match &mut self.inner {
            Inner::Once(opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) if bytes.is_empty() => Poll::Ready(None),
                    Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                    None => Poll::Ready(None),
                }
            }
            Inner::Taken => Poll::Ready(Some(Err("A `Taken` body should never be polled".into()))),
        }
    }

    /// If possible, return a reference to this body as `&[u8]`
    ///
    /// Returns `None` for bodies that have been taken.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.retained.as_deref()
    }

    /// Attempt to clone this body.
    ///
    /// Cloning succeeds as long as the body content is still known. The clone always starts
    /// from the beginning of the content, even if this body has already been polled.
    pub fn try_clone(&self) -> Option<Self> {
        self.retained.clone().map(Self::from_bytes)
    }

    pub fn content_length(&self) -> Option<u64> {
        self.retained.as_ref().map(|bytes| bytes.len() as u64)
    }
}

impl Default for SdkBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        Self::from_bytes(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        Self::from_bytes(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.inner {
            Inner::Once(None) => true,
            Inner::Once(Some(bytes)) => bytes.is_empty(),
            Inner::Taken => false,
        }
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.content_length() {
            Some(len) => http_body::SizeHint::with_exact(len),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[test]
    fn valid_body_is_debuggable() {
        assert_eq!(
            format!("{:?}", SdkBody::from("hello")),
            r#"SdkBody::Once("hello")"#
        );
    }

    #[tokio::test]
    async fn clone_after_read_starts_from_the_beginning() {
        let mut body = SdkBody::from("hello world!");
        let chunk = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(&chunk[..], &b"hello world!"[..]);
        assert!(body.data().await.is_none());

        let cloned = body.try_clone().expect("content is retained");
        assert_eq!(cloned.bytes(), Some("hello world!".as_bytes()));
    }

    #[test]
    fn taken_body_cannot_be_cloned() {
        let body = SdkBody::taken();
        assert!(body.try_clone().is_none());
        assert!(body.bytes().is_none());
    }

    #[tokio::test]
    async fn empty_body_ends_immediately() {
        let mut body = SdkBody::empty();
        assert!(body.is_end_stream());
        assert!(body.data().await.is_none());
    }
}
