//! `serde` support for `ZString`.
//!
//! A `ZString` serializes as a byte string and deserializes from byte
//! strings, byte buffers, sequences of integers, and UTF-8 strings.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::ZString;
use crate::alloc::vec::Vec;
use crate::Backend;

impl<B> Serialize for ZString<B>
where
    B: Backend,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(self.as_slice())
    }
}

struct ZStringVisitor<B> {
    data: PhantomData<B>,
}

impl<'de, B: Backend> Visitor<'de> for ZStringVisitor<B> {
    type Value = ZString<B>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a byte string")
    }

    #[inline]
    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(ZString::from_slice(v))
    }

    #[inline]
    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(ZString::from_slice(&v))
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(ZString::from_slice(v.as_bytes()))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut this = ZString::new();
        if let Some(size) = seq.size_hint() {
            this.reserve(size);
        }
        while let Some(unit) = seq.next_element::<u8>()? {
            this.push(unit);
        }
        Ok(this)
    }
}

impl<'de, B> Deserialize<'de> for ZString<B>
where
    B: Backend,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_byte_buf(ZStringVisitor { data: PhantomData })
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    use crate::alloc::string::ToString;
    use crate::ZString;

    #[test]
    fn test_tokens() {
        let s = ZString::from(b"abc".as_slice());
        assert_tokens(&s, &[Token::Bytes(b"abc")]);
    }

    #[test]
    fn test_de_alternatives() {
        let s = ZString::from(b"abc".as_slice());
        assert_de_tokens(&s, &[Token::ByteBuf(b"abc")]);
        assert_de_tokens(&s, &[Token::Str("abc")]);
        assert_de_tokens(
            &s,
            &[
                Token::Seq { len: Some(3) },
                Token::U8(b'a'),
                Token::U8(b'b'),
                Token::U8(b'c'),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_json() {
        let s = ZString::from(&[1u8, 2, 3][..]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[1,2,3]".to_string());
        let back: ZString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
