//! lcdshell firmware - nRF52840 + HD44780 16×2 LCD + 4×4 matrix keypad.
//!
//! A single embassy task owns the display, the keypad and the shell. It
//! wakes on a periodic ticker, samples the keypad once and runs one shell
//! tick to completion before sleeping again, so the shell state never has
//! a second writer.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pin as _, Pull};
use embassy_time::{Delay, Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use lcdshell::keypad::MatrixKeypad;
use lcdshell::lcd::{self, CharDisplay, Hd44780};
use lcdshell::{catalog, config, Error, KeySource, TickPeriod};

fn output(pin: AnyPin) -> Output<'static> {
    Output::new(pin, Level::Low, OutputDrive::Standard)
}

fn input(pin: AnyPin) -> Input<'static> {
    Input::new(pin, Pull::Up)
}

/// Report a configuration error on the LCD and stop here for good.
fn halt(display: &mut impl CharDisplay, err: Error) -> ! {
    error!("startup failed: {}", err);
    lcd::show_error(display, &err);
    loop {
        cortex_m::asm::wfi();
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("lcdshell starting");

    let mut display = Hd44780::new(
        output(p.P1_01.degrade()),
        output(p.P1_02.degrade()),
        [
            output(p.P1_03.degrade()),
            output(p.P1_04.degrade()),
            output(p.P1_05.degrade()),
            output(p.P1_06.degrade()),
        ],
        Delay,
    );
    display.init();
    lcd::load_glyphs(&mut display);

    let mut keypad = MatrixKeypad::new(
        [
            output(p.P1_10.degrade()),
            output(p.P1_11.degrade()),
            output(p.P1_12.degrade()),
            output(p.P1_13.degrade()),
        ],
        [
            input(p.P1_14.degrade()),
            input(p.P1_15.degrade()),
            input(p.P0_02.degrade()),
            input(p.P0_03.degrade()),
        ],
        Delay,
    );

    let period = match TickPeriod::from_secs(config::TICK_PERIOD_SECS) {
        Ok(period) => period,
        Err(e) => halt(&mut display, e),
    };
    let mut shell = match catalog::build(period) {
        Ok(shell) => shell,
        Err(e) => halt(&mut display, e),
    };

    info!("tick every {} us", period.as_micros());
    shell.start(&mut display);

    let mut ticker = Ticker::every(Duration::from_micros(period.as_micros()));
    loop {
        ticker.next().await;
        let raw = keypad.sample();
        shell.tick(&mut display, raw);
    }
}
