/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as URI path labels and query parameters

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be escaped in a label or query value: everything except unreserved
/// characters (`A-Z a-z 0-9 - . _ ~`)
pub const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

/// Percent-encode a path label
pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Builds a query string, preserving insertion order
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
    prefix: char,
}

impl Writer {
    pub fn new(path: impl Into<String>) -> Self {
        Writer {
            out: path.into(),
            prefix: '?',
        }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(k));
        self.out.push('=');
        self.out.push_str(&fmt_string(v));
        self.prefix = '&';
    }

    pub fn build(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod test {
    use crate::label::{fmt_string, Writer};
    use proptest::prelude::*;

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(fmt_string("fs-123"), "fs-123");
        assert_eq!(fmt_string("a/b c"), "a%2Fb%20c");
        assert_eq!(
            fmt_string("arn:aws:elasticfilesystem:us-east-1:1234:file-system/fs-1"),
            "arn%3Aaws%3Aelasticfilesystem%3Aus-east-1%3A1234%3Afile-system%2Ffs-1"
        );
    }

    #[test]
    fn query_writer_orders_params() {
        let mut writer = Writer::new("/2015-02-01/file-systems");
        writer.push_kv("FileSystemId", "fs-1");
        writer.push_kv("MaxItems", "10");
        assert_eq!(
            writer.build(),
            "/2015-02-01/file-systems?FileSystemId=fs-1&MaxItems=10"
        );
    }

    proptest! {
        #[test]
        fn encoded_labels_are_valid_path_segments(s in any::<String>()) {
            let encoded = fmt_string(&s);
            let uri = format!("/{}", encoded);
            prop_assert!(uri.parse::<http::Uri>().is_ok());
            prop_assert!(!encoded.contains('/'));
        }
    }
}
