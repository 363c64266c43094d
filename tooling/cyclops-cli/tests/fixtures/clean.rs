pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn increment(&mut self, by: u64) {
        if by > 0 {
            self.value += by;
        }
    }

    pub fn value(&self) -> u64 {
        return self.value;
    }
}
