/// Full-screen viewer over a log's images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    images: Vec<String>,
    index: usize,
}

impl Gallery {
    pub fn open(images: &[String]) -> Self {
        Self {
            images: images.to_vec(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.images.len()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.index -= 1;
        }
    }
}
