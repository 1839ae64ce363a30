use std::time::Duration;

use crate::config::Timing;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub cursor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Clear,
    Typing(usize),
    CursorOn,
    CursorOff,
    Done,
}

/// Frames of the hero typing animation, each paired with the delay to wait
/// before showing it.
///
/// The text is blanked immediately, typed one character at a time, then a
/// blinking cursor is shown for a while and removed.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    phase: Phase,
    start: Duration,
    per_char: Duration,
    cursor_hold: Duration,
}

impl Typewriter {
    pub fn new(text: &str, timing: &Timing) -> Self {
        Self {
            chars: text.chars().collect(),
            phase: Phase::Clear,
            start: Duration::from_millis(timing.typewriter_start_ms),
            per_char: Duration::from_millis(timing.typewriter_char_ms),
            cursor_hold: Duration::from_millis(timing.typewriter_cursor_ms),
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn typed(&self, n: usize) -> String {
        self.chars[..n].iter().collect()
    }
}

impl Iterator for Typewriter {
    type Item = (Duration, Frame);

    fn next(&mut self) -> Option<Self::Item> {
        let (next, item) = match self.phase {
            Phase::Clear => {
                let next = if self.chars.is_empty() {
                    Phase::CursorOn
                } else {
                    Phase::Typing(1)
                };
                (next, (Duration::ZERO, Frame::default()))
            }
            Phase::Typing(n) => {
                let delay = if n == 1 { self.start } else { self.per_char };
                let next = if n == self.chars.len() {
                    Phase::CursorOn
                } else {
                    Phase::Typing(n + 1)
                };
                let frame = Frame {
                    text: self.typed(n),
                    cursor: false,
                };
                (next, (delay, frame))
            }
            Phase::CursorOn => {
                let delay = if self.chars.is_empty() {
                    self.start
                } else {
                    self.per_char
                };
                let frame = Frame {
                    text: self.text(),
                    cursor: true,
                };
                (Phase::CursorOff, (delay, frame))
            }
            Phase::CursorOff => {
                let frame = Frame {
                    text: self.text(),
                    cursor: false,
                };
                (Phase::Done, (self.cursor_hold, frame))
            }
            Phase::Done => return None,
        };
        self.phase = next;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn frame(text: &str, cursor: bool) -> Frame {
        Frame {
            text: text.to_string(),
            cursor,
        }
    }

    #[test]
    fn test_full_sequence() {
        let frames = Typewriter::new("Arya", &Timing::default()).collect::<Vec<_>>();
        assert_eq!(
            frames,
            vec![
                (ms(0), frame("", false)),
                (ms(1000), frame("A", false)),
                (ms(150), frame("Ar", false)),
                (ms(150), frame("Ary", false)),
                (ms(150), frame("Arya", false)),
                (ms(150), frame("Arya", true)),
                (ms(3000), frame("Arya", false)),
            ]
        );
    }

    #[test]
    fn test_total_duration() {
        let total = Typewriter::new("Arya", &Timing::default())
            .map(|(d, _)| d)
            .sum::<Duration>();
        // 1000 start + 3 * 150 typing + 150 to cursor + 3000 hold
        assert_eq!(total, ms(4600));
    }

    #[test]
    fn test_multibyte_text() {
        let frames = Typewriter::new("Zoë", &Timing::default())
            .map(|(_, f)| f.text)
            .collect::<Vec<_>>();
        assert_eq!(frames, vec!["", "Z", "Zo", "Zoë", "Zoë", "Zoë"]);
    }

    #[test]
    fn test_empty_text() {
        let frames = Typewriter::new("", &Timing::default()).collect::<Vec<_>>();
        assert_eq!(
            frames,
            vec![
                (ms(0), frame("", false)),
                (ms(1000), frame("", true)),
                (ms(3000), frame("", false)),
            ]
        );
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut tw = Typewriter::new("Hi", &Timing::default());
        while tw.next().is_some() {}
        assert!(tw.next().is_none());
        assert_eq!(tw.text(), "Hi");
    }
}
