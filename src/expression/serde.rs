use std::fmt;

use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use super::PostfixEx;

impl Serialize for PostfixEx {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.unparse())
    }
}

impl<'de> Deserialize<'de> for PostfixEx {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PostfixExVisitor)
    }
}

#[derive(Debug)]
struct PostfixExVisitor;

impl<'de> Visitor<'de> for PostfixExVisitor {
    type Value = PostfixEx;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string that can be parsed as expression in t")
    }

    fn visit_str<E>(self, unparsed: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        PostfixEx::parse(unparsed).map_err(|epe| E::custom(format!("Parse error - {}", epe.msg)))
    }
}

#[cfg(test)]
use serde_test::Token;

#[test]
fn test_ser_de() {
    let test_inner = |expr: PostfixEx, text: &'static str| {
        serde_test::assert_tokens(&expr, &[Token::Str(text)]);
        let serialized = serde_json::to_string(&expr).unwrap();
        let deserialized = serde_json::from_str::<PostfixEx>(serialized.as_str()).unwrap();
        assert_eq!(deserialized, expr);
    };
    let text = "sin(2t)^2 - 1/t";
    test_inner(PostfixEx::parse(text).unwrap(), text);
    let text = "-4 + t^2";
    test_inner(PostfixEx::parse(text).unwrap(), text);

    assert!(serde_json::from_str::<PostfixEx>("\"sin^2(5)\"").is_err());
}
