//! Property tests for event dispatch.

use hookbell::hooks::{Decision, EventKind, HookInput, dispatch_hook};
use hookbell::notify::SilentNotifier;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn known_names() -> Vec<&'static str> {
    vec![
        "PreToolUse",
        "PostToolUse",
        "PermissionRequest",
        "UserPromptSubmit",
        "Stop",
        "SubagentStop",
        "SessionStart",
        "SessionEnd",
        "Notification",
        "PreCompact",
    ]
}

/// Any JSON scalar, including the wrong types for the fields handlers read.
fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| json!(f)),
        ".{0,24}".prop_map(Value::String),
    ]
}

/// Payloads with any mix of the recognized keys and arbitrary extras.
fn payload() -> impl Strategy<Value = HookInput> {
    let keys = prop_oneof![
        Just("tool_name".to_string()),
        Just("subagent_type".to_string()),
        Just("session_id".to_string()),
        Just("notification_type".to_string()),
        Just("current_token_count".to_string()),
        Just("event_type".to_string()),
        "[a-z_]{1,12}",
    ];
    prop::collection::btree_map(keys, scalar(), 0..8).prop_map(|fields| {
        let map: Map<String, Value> = fields.into_iter().collect();
        HookInput::from(map)
    })
}

proptest! {
    #[test]
    fn unknown_names_always_continue(name in ".{0,32}", input in payload()) {
        prop_assume!(!known_names().contains(&name.as_str()));

        let event = EventKind::parse(&name);
        prop_assert!(!event.is_known());
        prop_assert_eq!(dispatch_hook(&event, &input, &SilentNotifier), Decision::proceed());
    }

    #[test]
    fn decision_shape_ignores_payload(index in 0usize..10, input in payload()) {
        let name = known_names()[index];
        let decision = dispatch_hook(&EventKind::parse(name), &input, &SilentNotifier);

        let expected = if name == "PreToolUse" {
            Decision::allow()
        } else {
            Decision::proceed()
        };
        prop_assert_eq!(decision, expected);
    }

    #[test]
    fn serialized_decision_has_exactly_one_field(index in 0usize..10, input in payload()) {
        let name = known_names()[index];
        let decision = dispatch_hook(&EventKind::parse(name), &input, &SilentNotifier);

        let json: Value = serde_json::to_value(decision).unwrap();
        let object = json.as_object().unwrap();
        prop_assert_eq!(object.len(), 1);
        if name == "PreToolUse" {
            prop_assert_eq!(&object["permissionDecision"], &json!("allow"));
        } else {
            prop_assert_eq!(&object["continue"], &json!(true));
        }
    }
}
