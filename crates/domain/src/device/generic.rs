//! Fallback decoder for devices without a dedicated payload format.

use super::DeviceEvent;

/// Use the command name, suffixed by the scalar argument values joined with `_`.
///
/// `{"command": "move", "args": {"direction": "up", "rate": 50}}` decodes to
/// `move_up_50`. Arguments are taken in key order; arrays and objects are
/// skipped.
#[must_use]
pub fn decode_command(event: &DeviceEvent) -> Option<String> {
    let command = event.command_name().filter(|c| !c.is_empty())?;
    let mut action = command.to_string();
    for value in event.args.values() {
        let part = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        action.push('_');
        action.push_str(&part);
    }
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_bare_command_without_args() {
        let event = DeviceEvent::command("on");
        assert_eq!(decode_command(&event).as_deref(), Some("on"));
    }

    #[test]
    fn should_append_scalar_args_in_key_order() {
        let event = DeviceEvent::command("move")
            .with_arg("direction", "up")
            .with_arg("rate", 50);
        assert_eq!(decode_command(&event).as_deref(), Some("move_up_50"));
    }

    #[test]
    fn should_skip_nested_args() {
        let event = DeviceEvent::command("scene").with_arg("group", serde_json::json!([1, 2]));
        assert_eq!(decode_command(&event).as_deref(), Some("scene"));
    }

    #[test]
    fn should_return_none_without_command() {
        let event = DeviceEvent::default().with_arg("value", 1);
        assert_eq!(decode_command(&event), None);
    }
}
