// File:    interactive.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: An interactive terminal prompt drawing the boxes and routing keys and pastes to the input.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crossterm::{
    cursor::MoveToColumn,
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute, queue,
    style::{Print, Stylize},
    terminal::{self, Clear, ClearType},
};
use log::debug;
use otp_input_core::{
    BoxHandle, BoxId, FocusTracker, Key, MemoryBox, OtpInput, OtpInputConfig, Result,
};
use std::io::{self, Write};

/// Prompts for a code until Enter (returns the value) or Esc/Ctrl-C
/// (returns `None`).
pub(crate) fn run(config: OtpInputConfig) -> Result<Option<String>> {
    let (boxes, tracker) = MemoryBox::group(config.length);
    let mut input = OtpInput::new(config)?;
    input.attach(boxes.clone())?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnableBracketedPaste)?;
    let submitted = event_loop(&mut input, &boxes, &tracker, &mut stdout);
    let _ = execute!(stdout, DisableBracketedPaste);
    let _ = terminal::disable_raw_mode();
    println!();

    Ok(submitted?.then(|| input.value()))
}

fn event_loop<W: Write>(
    input: &mut OtpInput<MemoryBox>,
    boxes: &[MemoryBox],
    tracker: &FocusTracker,
    out: &mut W,
) -> io::Result<bool> {
    loop {
        render(out, boxes, tracker)?;
        // Once the input blurs itself after filling, keys go to the last box.
        let origin = tracker
            .focused()
            .unwrap_or_else(|| BoxId::new(boxes.len().saturating_sub(1)));

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Enter => return Ok(true),
                KeyCode::Esc => return Ok(false),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(false);
                }
                KeyCode::Left => {
                    let _ = input.on_key(origin, Key::ArrowLeft);
                }
                KeyCode::Right => {
                    let _ = input.on_key(origin, Key::ArrowRight);
                }
                KeyCode::Backspace => {
                    let _ = input.on_key(origin, Key::Backspace);
                }
                KeyCode::Char(c) => {
                    if let Some(b) = boxes.get(origin.get()) {
                        let raw = format!("{}{c}", b.value());
                        b.set_value(&raw);
                        input.on_input(origin, &raw);
                    }
                }
                other => debug!("Ignoring key {other:?}"),
            },
            Event::Paste(text) => {
                let _ = input.on_paste(Some(&text));
            }
            _ => {}
        }
    }
}

fn render<W: Write>(out: &mut W, boxes: &[MemoryBox], tracker: &FocusTracker) -> io::Result<()> {
    queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine), Print("Code: "))?;
    for b in boxes {
        let value = b.value();
        let cell = format!("[{}]", if value.is_empty() { " " } else { value.as_str() });
        if tracker.focused() == Some(b.id()) {
            queue!(out, Print(cell.reverse()))?;
        } else {
            queue!(out, Print(cell))?;
        }
        queue!(out, Print(" "))?;
    }
    out.flush()
}
