//! ESP-IDF firmware: wiring, threads and the stopwatch screen

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::digital::{ErrorType, InputPin};

use esp_idf_svc::hal::delay::Delay;
use esp_idf_svc::hal::gpio::{self, AnyIOPin, AnyInputPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::hal::spi;

use tft_stopwatch::ili9341::color;
use tft_stopwatch::input::{Button, ButtonPoller, POLL_PERIOD_MS};
use tft_stopwatch::panel::{DigitPanel, PanelColors};
use tft_stopwatch::stopwatch::{Reading, StatusLeds, Stopwatch, BLINK_PERIOD_MS, TICK_PERIOD_MS};
use tft_stopwatch::{DisplayError, DisplayInterface, Font, Ili9341, Orientation, PanelConfig, Pins};

/// Pre-converted splash image (generated at build time), empty when the asset is missing
const SPLASH_IMAGE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/splash.rgb565"));
const SPLASH_WIDTH: u16 = 160;
const SPLASH_HEIGHT: u16 = 120;
const SPLASH_MS: u64 = 1500;

/// Screen refresh period in milliseconds
const RENDER_PERIOD_MS: u64 = 45;

const DIGIT_ON: Rgb565 = Rgb565::RED;
/// Dim red, 0x1800
const DIGIT_OFF: Rgb565 = Rgb565::new(3, 0, 0);
const BACKGROUND: Rgb565 = Rgb565::BLACK;

const STACK_SIZE: usize = 8 * 1024;

type Display = Ili9341<
    DisplayInterface<
        spi::SpiBusDriver<'static, spi::SpiDriver<'static>>,
        PinDriver<'static, AnyOutputPin, Output>,
        PinDriver<'static, AnyOutputPin, Output>,
    >,
    PinDriver<'static, AnyOutputPin, Output>,
    PinDriver<'static, AnyOutputPin, Output>,
    Delay,
>;

/// Everything needed to build the display inside the render thread
struct DisplayPins {
    spi: spi::SPI2,
    sclk: gpio::Gpio18,
    mosi: gpio::Gpio23,
    cs: AnyOutputPin,
    dc: AnyOutputPin,
    rst: AnyOutputPin,
    backlight: AnyOutputPin,
}

/// Active-low button, with or without an internal pull-up
enum ButtonPin {
    InputOnly(PinDriver<'static, AnyInputPin, Input>),
    PullUp(PinDriver<'static, AnyIOPin, Input>),
}

impl ButtonPin {
    fn input_only(pin: AnyInputPin) -> anyhow::Result<Self> {
        Ok(ButtonPin::InputOnly(PinDriver::input(pin)?))
    }

    fn pull_up(pin: AnyIOPin) -> anyhow::Result<Self> {
        let mut driver = PinDriver::input(pin)?;
        driver.set_pull(Pull::Up)?;
        Ok(ButtonPin::PullUp(driver))
    }
}

impl ErrorType for ButtonPin {
    type Error = Infallible;
}

impl InputPin for ButtonPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(match self {
            ButtonPin::InputOnly(pin) => PinDriver::is_high(pin),
            ButtonPin::PullUp(pin) => PinDriver::is_high(pin),
        })
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

fn lock(stopwatch: &Mutex<Stopwatch>) -> MutexGuard<'_, Stopwatch> {
    stopwatch.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn run() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    let stopwatch = Arc::new(Mutex::new(Stopwatch::new()));
    let flip_requested = Arc::new(AtomicBool::new(false));

    // Status LEDs, active low, all off
    let mut led_red = PinDriver::output(pins.gpio4.downgrade_output())?;
    let mut led_green = PinDriver::output(pins.gpio16.downgrade_output())?;
    let mut led_blue = PinDriver::output(pins.gpio17.downgrade_output())?;
    led_red.set_high()?;
    led_green.set_high()?;
    led_blue.set_high()?;

    let display_pins = DisplayPins {
        spi: peripherals.spi2,
        sclk: pins.gpio18,
        mosi: pins.gpio23,
        cs: pins.gpio5.downgrade_output(),
        dc: pins.gpio2.downgrade_output(),
        rst: pins.gpio15.downgrade_output(),
        backlight: pins.gpio13.downgrade_output(),
    };

    {
        let stopwatch = stopwatch.clone();
        thread::Builder::new()
            .name("tick".into())
            .stack_size(STACK_SIZE)
            .spawn(move || tick_task(&stopwatch))?;
    }

    {
        let stopwatch = stopwatch.clone();
        let flip_requested = flip_requested.clone();
        thread::Builder::new()
            .name("display".into())
            .stack_size(STACK_SIZE * 2)
            .spawn(move || {
                if let Err(e) = display_task(display_pins, &stopwatch, &flip_requested) {
                    // A dead display bus cannot be recovered from
                    log::error!("Display task failed: {:?}", e);
                    panic!("display failure: {:?}", e);
                }
            })?;
    }

    {
        let stopwatch = stopwatch.clone();
        thread::Builder::new()
            .name("leds".into())
            .stack_size(STACK_SIZE)
            .spawn(move || {
                let mut leds = StatusLeds::new();
                loop {
                    let levels = leds.step(&lock(&stopwatch));
                    if let Err(e) = led_green
                        .set_level(levels.green_high.into())
                        .and_then(|_| led_red.set_level(levels.red_high.into()))
                    {
                        log::warn!("Failed to drive status LEDs: {:?}", e);
                    }
                    thread::sleep(Duration::from_millis(u64::from(BLINK_PERIOD_MS)));
                }
            })?;
    }

    let mut buttons = ButtonPoller::new([
        (Button::StartStop, ButtonPin::input_only(pins.gpio35.downgrade_input())?),
        (Button::Reset, ButtonPin::pull_up(pins.gpio22.downgrade())?),
        (Button::Function, ButtonPin::pull_up(pins.gpio21.downgrade())?),
    ]);

    log::info!("Stopwatch ready");
    loop {
        buttons.poll();
        while let Some(button) = buttons.next_press() {
            match button {
                Button::StartStop => lock(&stopwatch).toggle(),
                Button::Reset => lock(&stopwatch).reset(),
                Button::Function => flip_requested.store(true, Ordering::Release),
            }
        }
        thread::sleep(Duration::from_millis(u64::from(POLL_PERIOD_MS)));
    }
}

/// Advance the counter every 10 ms against a fixed schedule, so slow
/// wakeups do not accumulate drift
fn tick_task(stopwatch: &Mutex<Stopwatch>) {
    let period = Duration::from_millis(u64::from(TICK_PERIOD_MS));
    let mut next = Instant::now() + period;
    loop {
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        }
        lock(stopwatch).tick();
        next += period;
    }
}

fn display_task(
    pins: DisplayPins,
    stopwatch: &Mutex<Stopwatch>,
    flip_requested: &AtomicBool,
) -> anyhow::Result<()> {
    log::info!(
        "Configuring SPI bus: SCK {}, MOSI {}, CS {}, DC {}, RST {}, BL {}",
        Pins::SCK,
        Pins::MOSI,
        Pins::CS,
        Pins::DC,
        Pins::RST,
        Pins::BL
    );
    let driver = spi::SpiDriver::new(
        pins.spi,
        pins.sclk,
        pins.mosi,
        Option::<gpio::AnyIOPin>::None,
        &spi::SpiDriverConfig::new(),
    )?;
    let bus = spi::SpiBusDriver::new(driver, &spi::SpiConfig::new().baudrate(40.MHz().into()))?;
    let interface = DisplayInterface::new(
        bus,
        PinDriver::output(pins.dc)?,
        PinDriver::output(pins.cs)?,
    );

    let config = PanelConfig::ili9341()
        .with_orientation(Orientation::Landscape1)
        .with_clear_color(color::from_rgb565(BACKGROUND));
    let mut display: Display = Ili9341::new(
        interface,
        PinDriver::output(pins.rst)?,
        PinDriver::output(pins.backlight)?,
        Delay::default(),
        config,
    );
    display
        .init()
        .map_err(|e| anyhow::anyhow!("Display init failed: {:?}", e))?;

    if SPLASH_IMAGE.is_empty() {
        log::warn!("Splash image not available (assets/splash.png not found at build time)");
    } else {
        let x = (display.width() - SPLASH_WIDTH) / 2;
        let y = (display.height() - SPLASH_HEIGHT) / 2;
        match display.draw_picture(x, y, SPLASH_WIDTH, SPLASH_HEIGHT, SPLASH_IMAGE) {
            Ok(()) => thread::sleep(Duration::from_millis(SPLASH_MS)),
            Err(e) => log::warn!("Failed to draw splash: {:?}", e),
        }
        display
            .clear(BACKGROUND)
            .map_err(|e| anyhow::anyhow!("Failed to clear splash: {:?}", e))?;
    }

    let screen = Screen::new();
    loop {
        if flip_requested.swap(false, Ordering::Acquire) {
            let orientation = display.orientation().flipped();
            log::info!("Flipping screen to {:?}", orientation);
            display
                .set_rotation(orientation)
                .and_then(|_| display.clear(BACKGROUND))
                .map_err(|e| anyhow::anyhow!("Failed to flip screen: {:?}", e))?;
        }

        let (reading, laps) = {
            let stopwatch = lock(stopwatch);
            let mut laps = [None; 3];
            for (slot, lap) in laps.iter_mut().zip(stopwatch.laps()) {
                *slot = Some(lap);
            }
            (stopwatch.reading(), laps)
        };
        screen
            .draw(&mut display, reading, &laps)
            .map_err(|e| anyhow::anyhow!("Failed to draw stopwatch: {:?}", e))?;

        thread::sleep(Duration::from_millis(RENDER_PERIOD_MS));
    }
}

/// Landscape layout: three two-digit panels, blinking separators, three laps
struct Screen {
    minutes: DigitPanel,
    seconds: DigitPanel,
    hundredths: DigitPanel,
    font: Font<'static>,
}

impl Screen {
    fn new() -> Self {
        let colors = PanelColors {
            on: DIGIT_ON,
            off: DIGIT_OFF,
            background: BACKGROUND,
        };
        let digit = Size::new(40, 70);
        Self {
            minutes: DigitPanel::new(Point::new(15, 30), 2, digit, colors),
            seconds: DigitPanel::new(Point::new(117, 30), 2, digit, colors),
            hundredths: DigitPanel::new(Point::new(219, 30), 2, digit, colors),
            font: Font::from_mono_font(&FONT_10X20),
        }
    }

    fn draw(
        &self,
        display: &mut Display,
        reading: Reading,
        laps: &[Option<Reading>; 3],
    ) -> Result<(), DisplayError> {
        self.minutes.draw_number(display, reading.minutes())?;
        self.seconds.draw_number(display, reading.seconds())?;
        self.hundredths.draw_number(display, reading.hundredths())?;

        let separator = color::from_rgb565(if reading.colon_lit() { DIGIT_ON } else { DIGIT_OFF });
        for x in [109, 211] {
            display.draw_filled_circle(x, 52, 4, separator)?;
            display.draw_filled_circle(x, 78, 4, separator)?;
        }

        for (index, lap) in laps.iter().enumerate() {
            let text = match lap {
                Some(lap) => format!("{} {}", index + 1, lap),
                None => format!("{} --:--.--", index + 1),
            };
            let y = 120 + 30 * index as u16;
            display.draw_string(
                20,
                y,
                &text,
                &self.font,
                color::WHITE,
                color::from_rgb565(DIGIT_OFF),
            )?;
        }
        Ok(())
    }
}
