//! Wire-level tests against captured platform payloads.

use vs_core::{build_speech_response, Request, RequestKind, Response, SkillError};

const INTENT_REQUEST: &str = r#"{
  "version": "1.0",
  "session": {
    "new": false,
    "sessionId": "amzn1.echo-api.session.abc",
    "application": { "applicationId": "amzn1.ask.skill.coin" },
    "attributes": { "count": 2 },
    "user": { "userId": "amzn1.ask.account.xyz", "accessToken": "Atza|token" }
  },
  "context": {
    "System": {
      "application": { "applicationId": "amzn1.ask.skill.coin" },
      "user": { "userId": "amzn1.ask.account.xyz" },
      "device": { "deviceId": "amzn1.ask.device.123", "supportedInterfaces": {} },
      "apiEndpoint": "https://api.amazonalexa.com",
      "apiAccessToken": "eyJ0eXAi"
    }
  },
  "request": {
    "type": "IntentRequest",
    "requestId": "amzn1.echo-api.request.def",
    "timestamp": "2024-05-20T08:15:30Z",
    "locale": "en-US",
    "intent": {
      "name": "FlipCoinIntent",
      "confirmationStatus": "NONE",
      "slots": {
        "Times": { "name": "Times", "value": "2", "confirmationStatus": "NONE" }
      }
    }
  }
}"#;

#[test]
fn test_decode_full_intent_request() {
    let r = Request::from_json(INTENT_REQUEST).unwrap();
    assert!(!r.session.new);
    assert_eq!(r.session.user.access_token.as_deref(), Some("Atza|token"));
    assert_eq!(r.context.device_id(), Some("amzn1.ask.device.123"));
    assert_eq!(r.context.system.api_access_token, "eyJ0eXAi");
    assert_eq!(r.request.kind(), RequestKind::Intent);
    assert_eq!(r.request.request_id, "amzn1.echo-api.request.def");
    let intent = r.request.intent.as_ref().unwrap();
    assert_eq!(intent.slot_value("Times"), Some("2"));
    assert_eq!(r.application_id(), Some("amzn1.ask.skill.coin"));
}

#[test]
fn test_decode_bytes_matches_str() {
    let a = Request::from_json(INTENT_REQUEST).unwrap();
    let b = Request::from_slice(INTENT_REQUEST.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_missing_type_is_malformed() {
    let raw = INTENT_REQUEST.replace("\"type\": \"IntentRequest\",", "");
    let err = Request::from_json(&raw).unwrap_err();
    assert!(matches!(err, SkillError::MalformedRequest(_)));
}

#[test]
fn test_response_round_trip() {
    for text in ["Heads", "Tails", "", "multi\nline"] {
        let encoded = serde_json::to_string(&build_speech_response(text)).unwrap();
        let decoded: Response = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.speech_text(), text);
        assert_eq!(decoded.version, "1.0");
        assert!(decoded.response.should_end_session);
    }
}
