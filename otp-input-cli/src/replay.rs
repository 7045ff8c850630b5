// File:    replay.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Replays a scripted sequence of key, input and paste events against in-memory boxes.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;
use otp_input_core::{
    BoxHandle, BoxId, Key, MemoryBox, OtpInput, OtpInputConfig, OtpInputEvent, Result,
};
use serde::Deserialize;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// A replay script: an optional configuration and the events to feed in.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct Script {
    #[serde(default)]
    pub(crate) config: Option<OtpInputConfig>,
    pub(crate) events: Vec<ScriptEvent>,
}

/// One host event, addressed to a box by its position.
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub(crate) enum ScriptEvent {
    ArrowLeft {
        #[serde(rename = "box")]
        target: usize,
    },
    ArrowRight {
        #[serde(rename = "box")]
        target: usize,
    },
    Backspace {
        #[serde(rename = "box")]
        target: usize,
    },
    /// `raw` is what the box shows after the host applied the keystroke.
    Input {
        #[serde(rename = "box")]
        target: usize,
        raw: String,
    },
    Paste {
        #[serde(default)]
        text: Option<String>,
    },
}

/// Reads and parses a script file.
pub(crate) fn load_script(path: &Path) -> Result<Script> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Runs `events` and writes every emitted event as a JSON line, followed by
/// the final value and focus.
pub(crate) fn run<W: Write>(
    config: OtpInputConfig,
    events: &[ScriptEvent],
    out: &mut W,
) -> Result<()> {
    let (boxes, tracker) = MemoryBox::group(config.length);
    let mut input = OtpInput::new(config)?;
    let emitted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);
    input.subscribe(move |event: &OtpInputEvent| sink.borrow_mut().push(event.clone()));
    input.attach(boxes.clone())?;

    for event in events {
        debug!("Replaying {event:?}");
        match event {
            ScriptEvent::ArrowLeft { target } => {
                let _ = input.on_key(BoxId::new(*target), Key::ArrowLeft);
            }
            ScriptEvent::ArrowRight { target } => {
                let _ = input.on_key(BoxId::new(*target), Key::ArrowRight);
            }
            ScriptEvent::Backspace { target } => {
                let _ = input.on_key(BoxId::new(*target), Key::Backspace);
            }
            ScriptEvent::Input { target, raw } => {
                if let Some(b) = boxes.get(*target) {
                    b.set_value(raw);
                }
                input.on_input(BoxId::new(*target), raw);
            }
            ScriptEvent::Paste { text } => {
                let _ = input.on_paste(text.as_deref());
            }
        }
        for change in emitted.borrow_mut().drain(..) {
            writeln!(out, "{}", serde_json::to_string(&change)?)?;
        }
    }

    writeln!(out, "value: {}", input.value())?;
    match tracker.focused() {
        Some(id) => writeln!(out, "focused: {}", id.get())?,
        None => writeln!(out, "focused: none")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(json: &str) -> String {
        let script: Script = serde_json::from_str(json).unwrap();
        let mut out = Vec::new();
        run(script.config.unwrap_or_default(), &script.events, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn typed_code_reports_value_and_focus() {
        let out = replay(
            r#"{
                "config": { "length": 3 },
                "events": [
                    { "type": "input", "box": 0, "raw": "1" },
                    { "type": "input", "box": 1, "raw": "2" },
                    { "type": "input", "box": 2, "raw": "3" }
                ]
            }"#,
        );
        assert!(out.contains(r#"{"type":"filled","value":"123"}"#));
        assert!(out.ends_with("value: 123\nfocused: none\n"));
    }

    #[test]
    fn paste_without_text_is_accepted() {
        let out = replay(
            r#"{ "events": [ { "type": "paste" }, { "type": "arrow_right", "box": 0 } ] }"#,
        );
        assert_eq!(out, "value: \nfocused: 1\n");
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let parsed =
            serde_json::from_str::<Script>(r#"{ "events": [ { "type": "tab", "box": 0 } ] }"#);
        assert!(parsed.is_err());
    }
}
