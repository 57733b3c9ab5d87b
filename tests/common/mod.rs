#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use sdl_hello::{InitError, InitResult, VideoSubsystem};

/// Something that happened during a run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Init,
    Quit,
    Wrote(String),
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

/// A subsystem that records every call and fails with a fixed message on demand.
pub struct RecordingSubsystem {
    pub fail_with: Option<String>,
    pub journal: Journal,
}

impl RecordingSubsystem {
    pub fn succeeding() -> Self {
        Self {
            fail_with: None,
            journal: Journal::default(),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            journal: Journal::default(),
        }
    }

    pub fn count(&self, event: &Event) -> usize {
        self.journal.borrow().iter().filter(|e| *e == event).count()
    }

    pub fn events(&self) -> Vec<Event> {
        self.journal.borrow().clone()
    }

    /// A writer sharing this subsystem's journal.
    pub fn writer(&self) -> JournalWriter {
        JournalWriter {
            journal: Rc::clone(&self.journal),
        }
    }
}

impl VideoSubsystem for RecordingSubsystem {
    fn init(&mut self) -> InitResult<()> {
        self.journal.borrow_mut().push(Event::Init);
        match &self.fail_with {
            Some(message) => Err(InitError::Sdl(message.clone())),
            None => Ok(()),
        }
    }

    fn quit(&mut self) {
        self.journal.borrow_mut().push(Event::Quit);
    }
}

/// Records writes as journal events.
pub struct JournalWriter {
    journal: Journal,
}

impl Write for JournalWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.journal
            .borrow_mut()
            .push(Event::Wrote(String::from_utf8_lossy(buf).into_owned()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer whose every write fails, like a closed pipe.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}
