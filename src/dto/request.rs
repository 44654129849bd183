use crate::gameplay::Hand;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayRequest {
    pub hand: String,
}

impl PlayRequest {
    /// Reads the player's hand from a raw request body.
    /// Anything that is not a `{"hand": "..."}` object decodes to
    /// [`Hand::unknown`], which no rule table accepts.
    pub fn decode(body: &[u8]) -> Hand {
        serde_json::from_slice::<Map<String, Value>>(body)
            .map_err(anyhow::Error::from)
            .and_then(Self::try_from)
            .map(|request| Hand::from(request.hand))
            .inspect_err(|e| log::debug!("undecodable play request: {}", e))
            .unwrap_or_else(|_| Hand::unknown())
    }
}

/// Field lookup prefers an exact `hand` key and falls back to any
/// ASCII casing of it (`Hand`, `HAND`), as existing clients send both.
impl TryFrom<Map<String, Value>> for PlayRequest {
    type Error = anyhow::Error;
    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let key = fields
            .keys()
            .find(|k| k.as_str() == "hand")
            .or_else(|| fields.keys().find(|k| k.eq_ignore_ascii_case("hand")))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing hand field"))?;
        let hand = fields
            .remove(&key)
            .ok_or_else(|| anyhow::anyhow!("missing hand field"))?;
        let hand = serde_json::from_value::<String>(hand)?;
        Ok(Self { hand })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hand() {
        assert_eq!(PlayRequest::decode(br#"{"hand":"SPOCK"}"#), Hand::from("SPOCK"));
    }

    #[test]
    fn ignores_extra_fields() {
        let body = br#"{"hand":"ROCK","player":"alice"}"#;
        assert_eq!(PlayRequest::decode(body), Hand::from("ROCK"));
    }

    #[test]
    fn key_casing_is_folded() {
        assert_eq!(PlayRequest::decode(br#"{"Hand":"ROCK"}"#), Hand::from("ROCK"));
        assert_eq!(PlayRequest::decode(br#"{"HAND":"PAPER"}"#), Hand::from("PAPER"));
        let both = br#"{"HAND":"PAPER","hand":"SPOCK"}"#;
        assert_eq!(PlayRequest::decode(both), Hand::from("SPOCK"));
    }

    #[test]
    fn missing_hand_is_unknown() {
        assert!(PlayRequest::decode(br#"{}"#).is_unknown());
        assert!(PlayRequest::decode(br#"{"hands":"ROCK"}"#).is_unknown());
        assert!(PlayRequest::decode(br#"{"hand":null}"#).is_unknown());
    }

    #[test]
    fn garbage_is_unknown() {
        assert!(PlayRequest::decode(b"\xff\xfe not json").is_unknown());
        assert!(PlayRequest::decode(b"").is_unknown());
        assert!(PlayRequest::decode(br#"{"hand":3}"#).is_unknown());
        assert!(PlayRequest::decode(br#"["ROCK"]"#).is_unknown());
        assert!(PlayRequest::decode(br#""ROCK""#).is_unknown());
    }
}
