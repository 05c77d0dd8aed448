const CAPACITY: usize = 3;

/// The last (up to) three accepted characters, oldest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindow {
    buf: [char; CAPACITY],
    len: usize,
}

impl SlidingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        if self.len < CAPACITY {
            self.buf[self.len] = c;
            self.len += 1;
        } else {
            self.buf.rotate_left(1);
            self.buf[CAPACITY - 1] = c;
        }
    }

    pub fn reset(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bigram(&self) -> Option<[char; 2]> {
        (self.len >= 2).then(|| [self.buf[self.len - 2], self.buf[self.len - 1]])
    }

    pub fn trigram(&self) -> Option<[char; 3]> {
        (self.len >= 3).then_some(self.buf)
    }
}
