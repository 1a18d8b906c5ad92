//! Chunked pixel streaming through a bounded scratch buffer

use display_interface::DisplayError;

use crate::ili9341::cmd::{Cmd, Command};
use crate::ili9341::interface::Transport;

/// Scratch buffer size, one transfer's worth of bytes
pub const BUFFER_CAPACITY: usize = 256;

/// Where the bytes of each chunk come from
pub enum PixelSource<'a> {
    /// The same color for every pixel; the buffer is filled once
    Solid(u16),
    /// Caller supplied bytes, copied chunk by chunk
    Bytes(&'a [u8]),
}

/// Send one command (and its parameters) through `transport`.
///
/// Chip select is held from the command into the parameters.
pub fn write_command<T: Transport>(transport: &mut T, command: &Command) -> Result<(), DisplayError> {
    if command.opcode != Cmd::NONE {
        transport.send_command(command.opcode, !command.is_empty())?;
    }
    if !command.is_empty() {
        transport.send_data(command.params)?;
    }
    Ok(())
}

/// Start a memory write and push `total_bytes` through `buffer` in chunks.
///
/// `fill(offset, chunk)` writes the bytes at stream position `offset` into
/// `chunk` before it is sent. Returns the number of chunks sent, which is
/// `total_bytes.div_ceil(buffer.len())`.
pub fn stream_with<T, F>(
    transport: &mut T,
    buffer: &mut [u8],
    total_bytes: usize,
    mut fill: F,
) -> Result<usize, DisplayError>
where
    T: Transport,
    F: FnMut(usize, &mut [u8]),
{
    if buffer.is_empty() {
        return Err(DisplayError::InvalidFormatError);
    }
    write_command(transport, &Command::bare(Cmd::MEM_WRITE))?;

    let mut offset = 0;
    let mut chunks = 0;
    while offset < total_bytes {
        let len = (total_bytes - offset).min(buffer.len());
        fill(offset, &mut buffer[..len]);
        write_command(transport, &Command::data(&buffer[..len]))?;
        offset += len;
        chunks += 1;
    }
    log::trace!("Streamed {} bytes in {} chunks", total_bytes, chunks);
    Ok(chunks)
}

/// Stream `total_bytes` taken from `source`
pub fn stream_pixels<T: Transport>(
    transport: &mut T,
    buffer: &mut [u8],
    total_bytes: usize,
    source: PixelSource,
) -> Result<usize, DisplayError> {
    match source {
        PixelSource::Solid(color) => {
            // Every chunk has to start on a pixel boundary for the pattern to line up
            if buffer.len() % 2 != 0 {
                return Err(DisplayError::InvalidFormatError);
            }
            let [high, low] = color.to_be_bytes();
            for pair in buffer.chunks_exact_mut(2) {
                pair[0] = high;
                pair[1] = low;
            }
            stream_with(transport, buffer, total_bytes, |_, _| {})
        }
        PixelSource::Bytes(bytes) => {
            if bytes.len() < total_bytes {
                return Err(DisplayError::InvalidFormatError);
            }
            stream_with(transport, buffer, total_bytes, |offset, chunk| {
                chunk.copy_from_slice(&bytes[offset..offset + chunk.len()]);
            })
        }
    }
}

/// Bytes needed for the inclusive rectangle, 2 per pixel
pub fn window_bytes(x0: u16, y0: u16, x1: u16, y1: u16) -> usize {
    let columns = usize::from(x0.abs_diff(x1)) + 1;
    let rows = usize::from(y0.abs_diff(y1)) + 1;
    columns * rows * 2
}
