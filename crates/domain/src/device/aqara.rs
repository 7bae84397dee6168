//! Aqara remotes — payload decoders for the cube and the wireless switches.
//!
//! Pure functions over [`DeviceEvent`]. Unknown payloads decode to `None`.

use super::DeviceEvent;

/// `MFKZQ01LM` magic cube: gesture classification.
///
/// | Command | Args | Action |
/// |---------|------|--------|
/// | `shake` | | `shake` |
/// | `knock` | | `knock` |
/// | `slide` | | `slide` |
/// | `flip` | `flip_degrees = 90` | `flip90` |
/// | `flip` | `flip_degrees = 180` | `flip180` |
/// | `rotate_left` | | `rotate_left` |
/// | `rotate_right` | | `rotate_right` |
#[must_use]
pub fn decode_cube(event: &DeviceEvent) -> Option<String> {
    let action = match event.command_name()? {
        "shake" => "shake",
        "knock" => "knock",
        "slide" => "slide",
        "rotate_left" => "rotate_left",
        "rotate_right" => "rotate_right",
        "flip" => match event.int_arg("flip_degrees")? {
            90 => "flip90",
            180 => "flip180",
            _ => return None,
        },
        _ => return None,
    };
    Some(action.to_string())
}

const CLICK_TYPES: [&str; 5] = ["single", "double", "triple", "quadruple", "furious"];

/// `WXKG01LM` round switch: the `click_type` argument of a `click` command.
#[must_use]
pub fn decode_click(event: &DeviceEvent) -> Option<String> {
    if event.command_name()? != "click" {
        return None;
    }
    let click_type = event.str_arg("click_type")?;
    CLICK_TYPES
        .contains(&click_type)
        .then(|| click_type.to_string())
}

/// `WXKG11LM` mini switch: the numeric click count in `value`.
///
/// `0` is the release report and carries no action; counts above 4 are not
/// reported by the device and are ignored.
#[must_use]
pub fn decode_click_count(event: &DeviceEvent) -> Option<String> {
    let action = match event.int_arg("value")? {
        1 => "single",
        2 => "double",
        3 => "triple",
        4 => "quadruple",
        _ => return None,
    };
    Some(action.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: serde_json::Value) -> DeviceEvent {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn should_decode_cube_gestures() {
        let cases = [
            (serde_json::json!({"command": "shake"}), "shake"),
            (serde_json::json!({"command": "knock"}), "knock"),
            (serde_json::json!({"command": "slide"}), "slide"),
            (
                serde_json::json!({"command": "flip", "args": {"flip_degrees": 90}}),
                "flip90",
            ),
            (
                serde_json::json!({"command": "flip", "args": {"flip_degrees": 180}}),
                "flip180",
            ),
            (serde_json::json!({"command": "rotate_left"}), "rotate_left"),
            (serde_json::json!({"command": "rotate_right"}), "rotate_right"),
        ];
        for (payload, expected) in cases {
            assert_eq!(decode_cube(&event(payload)).as_deref(), Some(expected));
        }
    }

    #[test]
    fn should_ignore_flip_without_known_angle() {
        assert_eq!(decode_cube(&DeviceEvent::command("flip")), None);
        let odd = DeviceEvent::command("flip").with_arg("flip_degrees", 45);
        assert_eq!(decode_cube(&odd), None);
    }

    #[test]
    fn should_ignore_unknown_cube_command() {
        assert_eq!(decode_cube(&DeviceEvent::command("drop")), None);
        assert_eq!(decode_cube(&DeviceEvent::default()), None);
    }

    #[test]
    fn should_decode_every_click_type() {
        for click_type in ["single", "double", "triple", "quadruple", "furious"] {
            let payload = serde_json::json!({"command": "click", "args": {"click_type": click_type}});
            assert_eq!(decode_click(&event(payload)).as_deref(), Some(click_type));
        }
    }

    #[test]
    fn should_ignore_unknown_click_type() {
        let payload = DeviceEvent::command("click").with_arg("click_type", "long");
        assert_eq!(decode_click(&payload), None);
    }

    #[test]
    fn should_ignore_non_click_command() {
        let payload = DeviceEvent::command("hold").with_arg("click_type", "single");
        assert_eq!(decode_click(&payload), None);
    }

    #[test]
    fn should_decode_click_counts() {
        let cases = [
            (0, None),
            (1, Some("single")),
            (2, Some("double")),
            (3, Some("triple")),
            (4, Some("quadruple")),
        ];
        for (value, expected) in cases {
            let payload = event(serde_json::json!({"args": {"value": value}}));
            assert_eq!(decode_click_count(&payload).as_deref(), expected);
        }
    }

    #[test]
    fn should_ignore_click_count_out_of_range() {
        for value in [-1, 5, 16, 255] {
            let payload = event(serde_json::json!({"args": {"value": value}}));
            assert_eq!(decode_click_count(&payload), None);
        }
    }

    #[test]
    fn should_ignore_missing_click_count() {
        assert_eq!(decode_click_count(&DeviceEvent::command("attribute_updated")), None);
    }
}
