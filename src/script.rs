//! Scripted input event source.
//!
//! A script is plain text with one directive per line:
//!
//! ```text
//! # Bresenham from (0, 0) to (5, 2) with 5 px cells
//! click 2 2
//! click 27 12
//! tick
//! click 615 60        # focus the radius box
//! type 12
//! key enter
//! close
//! ```
//!
//! `tick` ends a frame; events after the last `tick` form one final frame.
//! `#` starts a comment at the beginning of a line or after whitespace, so
//! `type a#7` keeps its `#`; a lone `#` keystroke is written `key hash`.

use crate::input::{InputEvent, Key, MouseButton};
use std::path::Path;
use thiserror::Error;

/// A problem found while parsing a script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown directive '{directive}'")]
    UnknownDirective { line: usize, directive: String },
    #[error("line {line}: '{directive}' expects {expected}")]
    MissingArgument {
        line: usize,
        directive: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },
    #[error("line {line}: unknown mouse button '{value}'")]
    UnknownButton { line: usize, value: String },
    #[error("line {line}: unknown key '{value}'")]
    UnknownKey { line: usize, value: String },
    #[error("line {line}: unexpected trailing input '{value}'")]
    TrailingInput { line: usize, value: String },
}

/// Input events grouped into frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventScript {
    ticks: Vec<Vec<InputEvent>>,
}

impl EventScript {
    /// Parses script text.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut ticks = Vec::new();
        let mut current = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = strip_comment(raw).trim();
            if content.is_empty() {
                continue;
            }

            let (directive, rest) = content
                .split_once(char::is_whitespace)
                .map_or((content, ""), |(d, r)| (d, r.trim()));

            match directive.to_ascii_lowercase().as_str() {
                "tick" => {
                    expect_end(line, rest)?;
                    ticks.push(std::mem::take(&mut current));
                }
                "close" => {
                    expect_end(line, rest)?;
                    current.push(InputEvent::Close);
                }
                "click" => current.push(parse_click(line, rest)?),
                "key" => current.push(InputEvent::KeyPress(parse_key(line, rest)?)),
                "type" => {
                    if rest.is_empty() {
                        return Err(ScriptError::MissingArgument {
                            line,
                            directive: "type",
                            expected: "text",
                        });
                    }
                    current.extend(rest.chars().map(|c| InputEvent::KeyPress(Key::Char(c))));
                }
                _ => {
                    return Err(ScriptError::UnknownDirective {
                        line,
                        directive: directive.to_string(),
                    });
                }
            }
        }

        if !current.is_empty() {
            ticks.push(current);
        }

        Ok(Self { ticks })
    }

    /// Reads and parses a script file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Events per frame, in arrival order.
    pub fn ticks(&self) -> &[Vec<InputEvent>] {
        &self.ticks
    }

    /// Total number of events across all frames.
    pub fn event_count(&self) -> usize {
        self.ticks.iter().map(Vec::len).sum()
    }
}

/// Drops a trailing comment: a `#` at line start or preceded by whitespace.
fn strip_comment(raw: &str) -> &str {
    let mut previous = None;
    for (index, c) in raw.char_indices() {
        if c == '#' && previous.is_none_or(char::is_whitespace) {
            return &raw[..index];
        }
        previous = Some(c);
    }
    raw
}

fn expect_end(line: usize, rest: &str) -> Result<(), ScriptError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::TrailingInput {
            line,
            value: rest.to_string(),
        })
    }
}

fn parse_click(line: usize, rest: &str) -> Result<InputEvent, ScriptError> {
    let mut parts = rest.split_whitespace();
    let missing = || ScriptError::MissingArgument {
        line,
        directive: "click",
        expected: "X Y [left|right|middle]",
    };

    let x = parse_coordinate(line, parts.next().ok_or_else(missing)?)?;
    let y = parse_coordinate(line, parts.next().ok_or_else(missing)?)?;
    let button = match parts.next() {
        None => MouseButton::Left,
        Some(name) => match name.to_ascii_lowercase().as_str() {
            "left" => MouseButton::Left,
            "right" => MouseButton::Right,
            "middle" => MouseButton::Middle,
            _ => {
                return Err(ScriptError::UnknownButton {
                    line,
                    value: name.to_string(),
                });
            }
        },
    };

    if let Some(extra) = parts.next() {
        return Err(ScriptError::TrailingInput {
            line,
            value: extra.to_string(),
        });
    }

    Ok(InputEvent::MousePress { button, x, y })
}

fn parse_coordinate(line: usize, value: &str) -> Result<i32, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidCoordinate {
        line,
        value: value.to_string(),
    })
}

fn parse_key(line: usize, rest: &str) -> Result<Key, ScriptError> {
    if rest.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            directive: "key",
            expected: "enter, backspace, space, hash or a single character",
        });
    }

    match rest.to_ascii_lowercase().as_str() {
        "enter" | "return" => return Ok(Key::Return),
        "backspace" => return Ok(Key::Backspace),
        "space" => return Ok(Key::Char(' ')),
        "hash" => return Ok(Key::Char('#')),
        _ => {}
    }

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Key::Char(c)),
        _ => Err(ScriptError::UnknownKey {
            line,
            value: rest.to_string(),
        }),
    }
}
