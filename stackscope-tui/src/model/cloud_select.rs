//! Cloud selector state

pub struct CloudSelectState {
    pub clouds: Vec<String>,
    pub selected: usize,
}

impl CloudSelectState {
    pub fn new(clouds: Vec<String>) -> Self {
        Self {
            clouds,
            selected: 0,
        }
    }

    /// Re-opens the selector with the active cloud highlighted.
    pub fn open(&mut self, clouds: Vec<String>, active: &str) {
        self.selected = clouds.iter().position(|c| c == active).unwrap_or(0);
        self.clouds = clouds;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.clouds.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn current(&self) -> Option<&str> {
        self.clouds.get(self.selected).map(String::as_str)
    }
}
