#![allow(dead_code)]

use preset_launcher::launcher::Launcher;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Launcher that records every call. Association-open only succeeds for
/// targets containing `://`; shell spawning fails for commands listed in
/// `broken`.
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    pub calls: Rc<RefCell<Vec<String>>>,
    pub broken: Vec<String>,
    pub open_works: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self {
            open_works: true,
            ..Default::default()
        }
    }

    pub fn without_handlers() -> Self {
        Self::default()
    }

    pub fn failing(mut self, cmd: &str) -> Self {
        self.broken.push(cmd.to_owned());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, target: &str) -> io::Result<()> {
        self.calls.borrow_mut().push(format!("open:{target}"));
        if self.open_works && target.contains("://") {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::Other, "no application associated"))
        }
    }

    fn spawn_shell(&self, cmd: &str) -> io::Result<()> {
        self.calls.borrow_mut().push(format!("shell:{cmd}"));
        if self.broken.iter().any(|b| b == cmd) {
            Err(io::Error::new(io::ErrorKind::NotFound, "interpreter missing"))
        } else {
            Ok(())
        }
    }
}
