// Fixture: one method well over the default maximum, one trivial method, and
// a non-ASCII identifier.

pub enum Command {
    Start,
    Stop,
    Pause,
    Resume,
    Status,
}

pub struct Dispatcher {
    running: bool,
    paused: bool,
}

impl Dispatcher {
    pub fn dispatch(&mut self, command: Command, force: bool) -> Result<(), String> {
        match command {
            Command::Start => {
                if self.running && !force {
                    return Err("already running".to_string());
                }
                self.running = true;
            }
            Command::Stop => {
                if !self.running || self.paused {
                    return Err("not running".to_string());
                }
                self.running = false;
            }
            Command::Pause => {
                while self.paused {
                    self.paused = false;
                }
                self.paused = true;
            }
            Command::Resume => {
                for _ in 0..3 {
                    if self.paused {
                        self.paused = false;
                    }
                }
            }
            Command::Status => {}
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

pub fn zähler(values: &[u32]) -> u32 {
    values.iter().sum()
}
