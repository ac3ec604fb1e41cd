//! Rolling keystroke buffer for the hidden dev-mode trigger

use std::collections::VecDeque;

/// Last `cap` characters typed, lowercased
#[derive(Debug, Clone)]
pub struct KeyBuffer {
    chars: VecDeque<char>,
    cap: usize,
    trigger: Vec<char>,
}

impl KeyBuffer {
    pub fn new(trigger: &str, cap: usize) -> Self {
        let trigger: Vec<char> = trigger.to_lowercase().chars().collect();
        let cap = cap.max(trigger.len());
        Self {
            chars: VecDeque::with_capacity(cap + 1),
            cap,
            trigger,
        }
    }

    /// Record a key (as reported by `KeyboardEvent.key`)
    ///
    /// Returns true when the buffer now ends with the trigger; the buffer is
    /// cleared so the same keystrokes cannot fire twice.
    pub fn push(&mut self, key: &str) -> bool {
        for c in key.to_lowercase().chars() {
            self.chars.push_back(c);
            if self.ends_with_trigger() {
                self.chars.clear();
                return true;
            }
        }
        while self.chars.len() > self.cap {
            self.chars.pop_front();
        }
        false
    }

    fn ends_with_trigger(&self) -> bool {
        let n = self.trigger.len();
        n > 0
            && self.chars.len() >= n
            && self
                .chars
                .iter()
                .skip(self.chars.len() - n)
                .eq(self.trigger.iter())
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contents(&self) -> String {
        self.chars.iter().collect()
    }
}
