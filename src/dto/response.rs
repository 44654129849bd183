use crate::gameplay::Hand;
use crate::gameplay::Outcome;
use crate::gameplay::Verdict;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub result: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_hand: Option<Hand>,
}

impl From<&Outcome> for PlayResponse {
    fn from(outcome: &Outcome) -> Self {
        Self {
            result: outcome.verdict(),
            computer_hand: outcome.revealed().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_omits_computer_hand() {
        let json = serde_json::to_value(PlayResponse::from(&Outcome::Unknown)).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "UNKNOWN" }));
    }

    #[test]
    fn known_reveals_computer_hand() {
        let outcome = Outcome::Win(Hand::from("LIZARD"));
        let json = serde_json::to_value(PlayResponse::from(&outcome)).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "WIN", "computerHand": "LIZARD" }));
    }
}
