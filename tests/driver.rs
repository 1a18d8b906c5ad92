//! Driver tests against the recording transport.
//!
//! Every test builds a driver on a [`Recorder`] and checks the decoded bus
//! traffic: command order, address windows and the pixels streamed into them.
//!
//! Run with: cargo test --test driver

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use tft_stopwatch::ili9341::color;
use tft_stopwatch::ili9341::mock::{
    BusEvent, Recorder, RecordingDelay, RecordingPin, RecordingTransport,
};
use tft_stopwatch::{Cmd, Command, DisplayError, Font, Ili9341, Orientation, PanelConfig};

type TestDisplay = Ili9341<RecordingTransport, RecordingPin, RecordingPin, RecordingDelay>;

fn display(recorder: &Recorder, config: PanelConfig<'static>) -> TestDisplay {
    Ili9341::new(
        recorder.transport(),
        recorder.pin("rst"),
        recorder.pin("bl"),
        recorder.delay(),
        config,
    )
}

fn command(opcode: u8, hold: bool) -> BusEvent {
    BusEvent::Command { opcode, hold }
}

/// 2x2 glyphs, `' '` is a diagonal and `'!'` is solid
static TINY_ROWS: [u16; 4] = [0x8000, 0x4000, 0xC000, 0xC000];

/// 8x4 cells with no glyph data, everything renders as background
static EMPTY_ROWS: [u16; 0] = [];

static SHORT_TABLE: [Command<'static>; 1] = [Command::new(Cmd::PWR_CTRL1, &[0x23])];

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

#[test]
fn init_runs_reset_table_wake_and_clear_in_order() {
    let recorder = Recorder::new();
    let config = PanelConfig::ili9341()
        .with_size(4, 6)
        .with_init_table(&SHORT_TABLE)
        .with_clear_color(color::BLUE);
    let mut display = display(&recorder, config);

    display.init().expect("init");

    let clear = color::BLUE.to_be_bytes().repeat(4 * 6);
    assert_eq!(
        recorder.events(),
        vec![
            BusEvent::Pin { name: "rst", high: false },
            BusEvent::DelayMs(10),
            BusEvent::Pin { name: "rst", high: true },
            BusEvent::DelayMs(10),
            command(Cmd::PWR_CTRL1, true),
            BusEvent::Data(vec![0x23]),
            command(Cmd::SLEEP_OUT, false),
            BusEvent::DelayMs(10),
            command(Cmd::DISPLAY_ON, false),
            BusEvent::DelayMs(10),
            BusEvent::Pin { name: "bl", high: true },
            command(Cmd::MEM_ACC_CTRL, true),
            BusEvent::Data(vec![Orientation::Portrait1.mem_access()]),
            command(Cmd::COLUMN_ADDR_SET, true),
            BusEvent::Data(vec![0, 0, 0, 3]),
            command(Cmd::PAGE_ADDR_SET, true),
            BusEvent::Data(vec![0, 0, 0, 5]),
            command(Cmd::MEM_WRITE, false),
            BusEvent::Data(clear),
        ]
    );
}

#[test]
fn software_reset_follows_the_reset_pulse() {
    let recorder = Recorder::new();
    let config = PanelConfig::ili9341()
        .with_size(2, 2)
        .with_init_table(&SHORT_TABLE)
        .with_software_reset(true);
    let mut display = display(&recorder, config);

    display.init().expect("init");

    let events = recorder.events();
    assert_eq!(events[4], command(Cmd::SW_RESET, false));
    assert_eq!(events[5], BusEvent::DelayMs(10));
    assert_eq!(events[6], command(Cmd::PWR_CTRL1, true));
}

#[test]
fn default_table_is_replayed_before_sleep_out() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.init().expect("init");

    let opcodes = recorder.opcodes();
    let sleep_out = opcodes
        .iter()
        .position(|&opcode| opcode == Cmd::SLEEP_OUT)
        .expect("sleep out sent");
    assert_eq!(sleep_out, 20);
    assert_eq!(opcodes[0], Cmd::PWR_CTRL_A);
    assert_eq!(opcodes[sleep_out + 1], Cmd::DISPLAY_ON);

    // 240x320 clear through the 256 byte buffer
    let frames = recorder.frames();
    let clear = frames.last().expect("clear frame");
    assert_eq!(clear.columns, (0, 239));
    assert_eq!(clear.pages, (0, 319));
    assert_eq!(clear.chunks.len(), 600);
    assert!(clear.chunks.iter().all(|chunk| chunk.len() == 256));
}

#[test]
fn init_applies_the_configured_orientation() {
    let recorder = Recorder::new();
    let config = PanelConfig::ili9341().with_orientation(Orientation::Landscape1);
    let mut display = display(&recorder, config);

    display.init().expect("init");

    assert_eq!(display.orientation(), Orientation::Landscape1);
    assert_eq!((display.width(), display.height()), (320, 240));
    let clear = recorder.frames().pop().expect("clear frame");
    assert_eq!(clear.columns, (0, 319));
    assert_eq!(clear.pages, (0, 239));
}

#[test]
fn failing_transport_stops_init() {
    let recorder = Recorder::new();
    let mut display = Ili9341::new(
        recorder.failing_transport(),
        recorder.pin("rst"),
        recorder.pin("bl"),
        recorder.delay(),
        PanelConfig::ili9341(),
    );

    let result = display.init();

    assert!(matches!(result, Err(DisplayError::BusWriteError)));
    // the reset pulse went out, the backlight never came on
    assert!(!recorder
        .events()
        .contains(&BusEvent::Pin { name: "bl", high: true }));
}

// ---------------------------------------------------------------------------
// Addressing and rotation
// ---------------------------------------------------------------------------

#[test]
fn address_window_is_big_endian_and_ascending() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.set_address_window(300, 0x0140, 1, 2).expect("window");

    assert_eq!(
        recorder.events(),
        vec![
            command(Cmd::COLUMN_ADDR_SET, true),
            BusEvent::Data(vec![0x00, 0x01, 0x01, 0x2C]),
            command(Cmd::PAGE_ADDR_SET, true),
            BusEvent::Data(vec![0x00, 0x02, 0x01, 0x40]),
        ]
    );
}

#[test]
fn rotation_swaps_the_logical_size() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    assert_eq!((display.width(), display.height()), (240, 320));

    display.set_rotation(Orientation::Landscape2).expect("rotate");
    assert_eq!((display.width(), display.height()), (320, 240));
    assert_eq!(display.size(), Size::new(320, 240));

    display.set_rotation(Orientation::Landscape1).expect("rotate");
    assert_eq!((display.width(), display.height()), (320, 240));

    display.set_rotation(Orientation::Portrait2).expect("rotate");
    assert_eq!((display.width(), display.height()), (240, 320));

    assert_eq!(
        recorder.data_bytes(),
        vec![
            Orientation::Landscape2.mem_access(),
            Orientation::Landscape1.mem_access(),
            Orientation::Portrait2.mem_access(),
        ]
    );
}

#[test]
fn fill_screen_covers_the_rotated_panel() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    display.set_rotation(Orientation::Landscape1).expect("rotate");
    recorder.clear();

    display.fill_screen(color::WHITE).expect("fill");

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns, (0, 319));
    assert_eq!(frames[0].pages, (0, 239));
    assert_eq!(frames[0].bytes().len(), 320 * 240 * 2);
}

// ---------------------------------------------------------------------------
// Pixels, rectangles and lines
// ---------------------------------------------------------------------------

#[test]
fn set_pixel_writes_one_pixel_window() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.set_pixel(17, 42, color::ORANGE).expect("pixel");

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns, (17, 17));
    assert_eq!(frames[0].pages, (42, 42));
    assert_eq!(frames[0].pixels(), vec![color::ORANGE]);
}

#[test]
fn pixel_outside_the_panel_is_dropped() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.set_pixel(240, 0, color::RED).expect("pixel");
    display.set_pixel(0, 320, color::RED).expect("pixel");

    assert!(recorder.events().is_empty());
}

#[test]
fn fill_rect_is_clamped_to_the_panel() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.fill_rect(200, 300, 1000, 1000, color::GREEN).expect("fill");

    let frames = recorder.frames();
    assert_eq!(frames[0].columns, (200, 239));
    assert_eq!(frames[0].pages, (300, 319));
    assert_eq!(frames[0].area(), 40 * 20);
    assert!(frames[0].pixels().iter().all(|&pixel| pixel == color::GREEN));
}

#[test]
fn horizontal_line_is_one_fill() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_line(0, 0, 5, 0, color::RED).expect("line");

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns, (0, 5));
    assert_eq!(frames[0].pages, (0, 0));
    assert_eq!(frames[0].pixels(), vec![color::RED; 6]);
}

#[test]
fn vertical_line_is_clamped() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_line(10, 400, 10, 300, color::RED).expect("line");

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns, (10, 10));
    assert_eq!(frames[0].pages, (300, 319));
}

#[test]
fn diagonal_line_plots_every_step() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_line(0, 0, 3, 3, color::WHITE).expect("line");

    assert_eq!(recorder.points(), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn shallow_line_stops_on_the_last_row() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_line(0, 0, 5, 1, color::WHITE).expect("line");

    assert_eq!(recorder.points(), vec![(0, 0), (1, 0), (2, 0), (3, 1)]);
}

#[test]
fn complete_line_reaches_the_endpoint() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_line_complete(0, 0, 5, 1, color::WHITE).expect("line");

    let points = recorder.points();
    assert_eq!(points.first(), Some(&(0, 0)));
    assert_eq!(points.last(), Some(&(5, 1)));
    assert_eq!(points.len(), 6);
}

#[test]
fn rectangle_outline_is_four_fills() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_rectangle(10, 20, 30, 40, color::CYAN).expect("rectangle");

    let windows: Vec<_> = recorder
        .frames()
        .iter()
        .map(|frame| (frame.columns, frame.pages))
        .collect();
    assert_eq!(
        windows,
        vec![
            ((10, 30), (20, 20)),
            ((30, 30), (20, 40)),
            ((10, 30), (40, 40)),
            ((10, 10), (20, 40)),
        ]
    );
}

// ---------------------------------------------------------------------------
// Circles
// ---------------------------------------------------------------------------

#[test]
fn zero_radius_circle_is_the_centre() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_circle(50, 60, 0, color::WHITE).expect("circle");

    let points = recorder.points();
    assert!(!points.is_empty());
    assert!(points.iter().all(|&point| point == (50, 60)));
}

#[test]
fn circle_points_lie_on_the_radius() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_circle(100, 100, 20, color::WHITE).expect("circle");

    let points = recorder.points();
    assert!(points.contains(&(100, 120)));
    assert!(points.contains(&(80, 100)));
    for (x, y) in points {
        let dx = f32::from(x) - 100.0;
        let dy = f32::from(y) - 100.0;
        let distance = (dx * dx + dy * dy).sqrt();
        assert!((distance - 20.0).abs() < 1.0, "({x}, {y}) is {distance} away");
    }
}

#[test]
fn circle_across_the_corner_drops_hidden_points() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_circle(0, 0, 10, color::WHITE).expect("circle");

    let points = recorder.points();
    assert!(points.contains(&(10, 0)));
    assert!(points.contains(&(0, 10)));
    assert!(points.iter().all(|&(x, y)| x <= 10 && y <= 10));
}

#[test]
fn filled_circle_starts_with_axis_points_then_diameter() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_filled_circle(10, 10, 2, color::RED).expect("circle");

    let frames = recorder.frames();
    let axis: Vec<_> = frames[..4]
        .iter()
        .map(|frame| (frame.columns.0, frame.pages.0))
        .collect();
    assert_eq!(axis, vec![(10, 12), (10, 8), (12, 10), (8, 10)]);
    assert_eq!(frames[4].columns, (8, 12));
    assert_eq!(frames[4].pages, (10, 10));
    assert!(frames[5..].iter().all(|frame| frame.pages.0 == frame.pages.1));
}

#[test]
fn filled_circle_spans_are_clipped() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_filled_circle(2, 2, 6, color::RED).expect("circle");

    let frames = recorder.frames();
    for frame in &frames {
        assert!(frame.columns.1 <= 239);
        assert!(frame.pages.1 <= 319);
    }
    // two of the four axis points are off the panel
    assert_eq!((frames[0].columns.0, frames[0].pages.0), (2, 8));
    assert_eq!((frames[1].columns.0, frames[1].pages.0), (8, 2));
    assert_eq!(frames[2].columns, (0, 8));
    assert_eq!(frames[2].pages, (2, 2));
}

// ---------------------------------------------------------------------------
// Pictures
// ---------------------------------------------------------------------------

#[test]
fn picture_bytes_are_sent_in_order() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let picture: Vec<u8> = (0..12).collect();

    display.draw_picture(5, 7, 3, 2, &picture).expect("picture");

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns, (5, 7));
    assert_eq!(frames[0].pages, (7, 8));
    assert_eq!(frames[0].bytes(), picture);
}

#[test]
fn picture_past_the_edge_is_rejected() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let picture = vec![0u8; 10 * 10 * 2];

    let result = display.draw_picture(235, 0, 10, 10, &picture);

    assert!(matches!(result, Err(DisplayError::OutOfBoundsError)));
    assert!(recorder.events().is_empty());
}

#[test]
fn short_picture_buffer_is_rejected() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    let result = display.draw_picture(0, 0, 4, 4, &[0u8; 31]);

    assert!(matches!(result, Err(DisplayError::InvalidFormatError)));
    assert!(recorder.events().is_empty());
}

#[test]
fn empty_picture_sends_nothing() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.draw_picture(0, 0, 0, 10, &[]).expect("picture");
    display.draw_picture(0, 0, 10, 0, &[]).expect("picture");

    assert!(recorder.events().is_empty());
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn glyph_bits_select_foreground_and_background() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::new(2, 2, &TINY_ROWS);

    display.draw_char(4, 6, ' ', &font, color::WHITE, color::BLACK).expect("char");
    display.draw_char(6, 6, '!', &font, color::WHITE, color::BLACK).expect("char");

    let frames = recorder.frames();
    assert_eq!(frames[0].columns, (4, 5));
    assert_eq!(frames[0].pages, (6, 7));
    assert_eq!(
        frames[0].pixels(),
        vec![color::WHITE, color::BLACK, color::BLACK, color::WHITE]
    );
    assert_eq!(frames[1].pixels(), vec![color::WHITE; 4]);
}

#[test]
fn missing_glyph_is_background() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::new(2, 2, &TINY_ROWS);

    display.draw_char(0, 0, 'Z', &font, color::WHITE, color::NAVY).expect("char");

    assert_eq!(recorder.frames()[0].pixels(), vec![color::NAVY; 4]);
}

#[test]
fn glyph_larger_than_the_buffer_spans_three_chunks() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    // 16x20 cell is 640 bytes, more than two scratch buffers
    let rows: Vec<u16> = (0..20).map(|row| 0xFFFF >> (row % 16)).collect();
    let font = Font::new(16, 20, &rows);

    display.draw_char(0, 0, ' ', &font, color::WHITE, color::BLACK).expect("char");

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns, (0, 15));
    assert_eq!(frames[0].pages, (0, 19));
    let lengths: Vec<usize> = frames[0].chunks.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![256, 256, 128]);

    let pixels = frames[0].pixels();
    assert_eq!(pixels.len(), 16 * 20);
    for (index, &pixel) in pixels.iter().enumerate() {
        let (row, column) = (index / 16, index % 16);
        let expected = if rows[row] & (0x8000 >> column) != 0 {
            color::WHITE
        } else {
            color::BLACK
        };
        assert_eq!(pixel, expected, "row {row} column {column}");
    }
}

#[test]
fn char_past_the_right_edge_wraps_to_the_next_line() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::new(8, 4, &EMPTY_ROWS);

    display.draw_char(236, 10, 'x', &font, color::WHITE, color::BLACK).expect("char");

    let frames = recorder.frames();
    assert_eq!(frames[0].columns, (0, 7));
    assert_eq!(frames[0].pages, (14, 17));
}

#[test]
fn char_below_the_panel_is_rejected() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::new(8, 4, &EMPTY_ROWS);

    let result = display.draw_char(0, 317, 'x', &font, color::WHITE, color::BLACK);

    assert!(matches!(result, Err(DisplayError::OutOfBoundsError)));
    assert!(recorder.events().is_empty());
}

#[test]
fn string_advances_by_glyph_width() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::new(8, 4, &EMPTY_ROWS);

    display.draw_string(10, 20, "12:3", &font, color::WHITE, color::BLACK).expect("string");

    let origins: Vec<_> = recorder
        .frames()
        .iter()
        .map(|frame| (frame.columns.0, frame.pages.0))
        .collect();
    assert_eq!(origins, vec![(10, 20), (18, 20), (26, 20), (34, 20)]);
}

#[test]
fn newline_carriage_return_goes_to_column_zero() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::new(8, 4, &EMPTY_ROWS);

    display.draw_string(10, 20, "AB\n\rCD", &font, color::WHITE, color::BLACK).expect("string");

    let origins: Vec<_> = recorder
        .frames()
        .iter()
        .map(|frame| (frame.columns.0, frame.pages.0))
        .collect();
    assert_eq!(origins, vec![(10, 20), (18, 20), (0, 25), (8, 25)]);
}

#[test]
fn bare_newline_returns_to_the_start_column() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::new(8, 4, &EMPTY_ROWS);

    display.draw_string(10, 20, "A\nB\rC", &font, color::WHITE, color::BLACK).expect("string");

    let origins: Vec<_> = recorder
        .frames()
        .iter()
        .map(|frame| (frame.columns.0, frame.pages.0))
        .collect();
    assert_eq!(origins, vec![(10, 20), (10, 25), (18, 25)]);
}

#[test]
fn mono_font_renders_through_the_driver() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());
    let font = Font::from_mono_font(&embedded_graphics::mono_font::ascii::FONT_6X10);

    display.draw_char(0, 0, 'I', &font, color::WHITE, color::BLACK).expect("char");

    let frame = &recorder.frames()[0];
    assert_eq!(frame.area(), 6 * 10);
    let lit = frame.pixels().iter().filter(|&&pixel| pixel == color::WHITE).count();
    assert!(lit > 0 && lit < 60);
}

// ---------------------------------------------------------------------------
// Panel control and embedded-graphics
// ---------------------------------------------------------------------------

#[test]
fn power_commands_settle_after_sending() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.sleep().expect("sleep");
    display.wake_up().expect("wake");
    display.display_off().expect("off");
    display.display_on().expect("on");

    assert_eq!(
        recorder.events(),
        vec![
            command(Cmd::SLEEP_IN, false),
            BusEvent::DelayMs(10),
            command(Cmd::SLEEP_OUT, false),
            BusEvent::DelayMs(10),
            command(Cmd::DISPLAY_OFF, false),
            BusEvent::DelayMs(10),
            command(Cmd::DISPLAY_ON, false),
            BusEvent::DelayMs(10),
        ]
    );
}

#[test]
fn brightness_and_inversion_commands() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.set_inverted(true).expect("invert");
    display.set_inverted(false).expect("invert");
    display.set_brightness(0x80).expect("brightness");

    assert_eq!(
        recorder.opcodes(),
        vec![
            Cmd::DISPLAY_INV_ON,
            Cmd::DISPLAY_INV_OFF,
            Cmd::WRITE_CTRL_DISP,
            Cmd::WRITE_DISP_BRIGHT,
        ]
    );
    assert_eq!(recorder.data_bytes().last(), Some(&0x80));
}

#[test]
fn backlight_follows_requests() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display.set_backlight(true).expect("backlight");
    display.set_backlight(false).expect("backlight");

    assert_eq!(
        recorder.events(),
        vec![
            BusEvent::Pin { name: "bl", high: true },
            BusEvent::Pin { name: "bl", high: false },
        ]
    );
}

#[test]
fn styled_rectangle_is_clipped_to_one_fill() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    Rectangle::new(Point::new(-5, -5), Size::new(10, 10))
        .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
        .draw(&mut display)
        .expect("draw");

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].columns, (0, 4));
    assert_eq!(frames[0].pages, (0, 4));
    assert!(frames[0].pixels().iter().all(|&pixel| pixel == color::RED));
}

#[test]
fn off_panel_fill_sends_nothing() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display
        .fill_solid(&Rectangle::new(Point::new(500, 500), Size::new(4, 4)), Rgb565::RED)
        .expect("fill");

    assert!(recorder.events().is_empty());
}

#[test]
fn draw_iter_drops_negative_points() {
    let recorder = Recorder::new();
    let mut display = display(&recorder, PanelConfig::ili9341());

    display
        .draw_iter([
            Pixel(Point::new(-1, 3), Rgb565::WHITE),
            Pixel(Point::new(3, 4), Rgb565::WHITE),
        ])
        .expect("draw");

    assert_eq!(recorder.points(), vec![(3, 4)]);
}
