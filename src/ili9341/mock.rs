//! Recording doubles for host-side testing
//!
//! The transport, the control pins and the delay all append to one shared
//! event list, so tests can check the exact order of bus traffic and the
//! timing barriers between commands.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use display_interface::DisplayError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::ili9341::cmd::Cmd;
use crate::ili9341::interface::Transport;

/// One observable step on the bus or the control lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// Command phase
    Command {
        /// Command byte
        opcode: u8,
        /// Chip select held into the data phase
        hold: bool,
    },
    /// Data phase
    Data(Vec<u8>),
    /// Control pin driven
    Pin {
        /// Name given to [`Recorder::pin`]
        name: &'static str,
        /// Level driven
        high: bool,
    },
    /// Delay in milliseconds
    DelayMs(u32),
}

/// One memory write: the window it targets and the chunks sent into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Start and end column
    pub columns: (u16, u16),
    /// Start and end page (row)
    pub pages: (u16, u16),
    /// Data transfers after the `MEM_WRITE`
    pub chunks: Vec<Vec<u8>>,
}

impl Frame {
    /// All bytes of the frame
    pub fn bytes(&self) -> Vec<u8> {
        self.chunks.concat()
    }

    /// Pixels of the frame as RGB565 words
    pub fn pixels(&self) -> Vec<u16> {
        self.bytes()
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect()
    }

    /// Window covers exactly one pixel
    pub fn is_point(&self) -> bool {
        self.columns.0 == self.columns.1 && self.pages.0 == self.pages.1
    }

    /// Number of pixels in the window
    pub fn area(&self) -> usize {
        let columns = usize::from(self.columns.0.abs_diff(self.columns.1)) + 1;
        let pages = usize::from(self.pages.0.abs_diff(self.pages.1)) + 1;
        columns * pages
    }
}

/// Shared event log
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<BusEvent>>>,
}

impl Recorder {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport appending to this log
    pub fn transport(&self) -> RecordingTransport {
        RecordingTransport {
            recorder: self.clone(),
            fail: false,
        }
    }

    /// Transport that records nothing and fails every transfer
    pub fn failing_transport(&self) -> RecordingTransport {
        RecordingTransport {
            recorder: self.clone(),
            fail: true,
        }
    }

    /// Output pin appending to this log under `name`
    pub fn pin(&self, name: &'static str) -> RecordingPin {
        RecordingPin {
            name,
            recorder: self.clone(),
        }
    }

    /// Delay appending to this log
    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            recorder: self.clone(),
        }
    }

    fn push(&self, event: BusEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Everything recorded so far
    pub fn events(&self) -> Vec<BusEvent> {
        self.events.borrow().clone()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Command bytes in order
    pub fn opcodes(&self) -> Vec<u8> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BusEvent::Command { opcode, .. } => Some(*opcode),
                _ => None,
            })
            .collect()
    }

    /// Length of every data transfer in order
    pub fn data_lengths(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BusEvent::Data(bytes) => Some(bytes.len()),
                _ => None,
            })
            .collect()
    }

    /// All data bytes concatenated
    pub fn data_bytes(&self) -> Vec<u8> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                BusEvent::Data(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// Decode the log into memory writes, each with the window active at the time
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut columns = (0, 0);
        let mut pages = (0, 0);
        let mut last_command = None;
        let mut current: Option<Frame> = None;

        for event in self.events.borrow().iter() {
            match event {
                BusEvent::Command { opcode, .. } => {
                    if let Some(frame) = current.take() {
                        frames.push(frame);
                    }
                    last_command = Some(*opcode);
                    if *opcode == Cmd::MEM_WRITE {
                        current = Some(Frame {
                            columns,
                            pages,
                            chunks: Vec::new(),
                        });
                    }
                }
                BusEvent::Data(bytes) => match (current.as_mut(), last_command) {
                    (Some(frame), _) => frame.chunks.push(bytes.clone()),
                    (None, Some(Cmd::COLUMN_ADDR_SET)) if bytes.len() == 4 => {
                        columns = address_pair(bytes);
                    }
                    (None, Some(Cmd::PAGE_ADDR_SET)) if bytes.len() == 4 => {
                        pages = address_pair(bytes);
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        if let Some(frame) = current {
            frames.push(frame);
        }
        frames
    }

    /// Coordinates of every single pixel write, in order
    pub fn points(&self) -> Vec<(u16, u16)> {
        self.frames()
            .iter()
            .filter(|frame| frame.is_point())
            .map(|frame| (frame.columns.0, frame.pages.0))
            .collect()
    }
}

fn address_pair(bytes: &[u8]) -> (u16, u16) {
    (
        u16::from_be_bytes([bytes[0], bytes[1]]),
        u16::from_be_bytes([bytes[2], bytes[3]]),
    )
}

/// [`Transport`] writing into a [`Recorder`]
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    recorder: Recorder,
    fail: bool,
}

impl Transport for RecordingTransport {
    fn send_command(&mut self, opcode: u8, hold_select: bool) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::BusWriteError);
        }
        self.recorder.push(BusEvent::Command {
            opcode,
            hold: hold_select,
        });
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.is_empty() {
            return Ok(());
        }
        if self.fail {
            return Err(DisplayError::BusWriteError);
        }
        self.recorder.push(BusEvent::Data(data.to_vec()));
        Ok(())
    }
}

/// Output pin writing into a [`Recorder`]
#[derive(Debug, Clone)]
pub struct RecordingPin {
    name: &'static str,
    recorder: Recorder,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(BusEvent::Pin {
            name: self.name,
            high: false,
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(BusEvent::Pin {
            name: self.name,
            high: true,
        });
        Ok(())
    }
}

/// Delay writing into a [`Recorder`] instead of sleeping
#[derive(Debug, Clone)]
pub struct RecordingDelay {
    recorder: Recorder,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.recorder.push(BusEvent::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.recorder.push(BusEvent::DelayMs(ms));
    }
}
