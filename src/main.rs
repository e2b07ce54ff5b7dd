//! MorseTrainer - Main entry point
//!
//! Binds the core game to ESP-IDF:
//! 1. Button edges are timestamped and pushed into the edge queue
//!    (GPIO ISR in production; polled sampling here)
//! 2. The edge timer classifies them into Morse symbols
//! 3. The assembler raises the ready flag when a candidate finalizes
//! 4. The game loop blocks on the flag, feeding the task watchdog

#![no_std]
#![no_main]

use esp_idf_svc::sys as esp_idf_sys;

use core::fmt::{self, Write};

use morse_trainer::{
    assembler::{InputAssembler, Outcome},
    console,
    edge::EdgeTimer,
    error::GameError,
    events::{Edge, EdgeKind, EdgeQueue},
    game::{Board, Game, Step},
    led::Rgb,
    signal::{wait_ready, Liveness, ReadyFlag},
    symbol::MorseSymbol,
};

// Static allocations: shared between the input side and the game loop.
static EDGE_QUEUE: EdgeQueue = EdgeQueue::new();
static READY: ReadyFlag = ReadyFlag::new();

/// Console sink over the ESP-IDF stdout.
struct UartConsole;

impl fmt::Write for UartConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // SAFETY: printf copies the buffer before returning; the %.*s
        // form bounds the read to the slice length.
        unsafe {
            esp_idf_sys::printf(
                b"%.*s\0".as_ptr().cast(),
                s.len() as core::ffi::c_int,
                s.as_ptr(),
            );
        }
        Ok(())
    }
}

/// Board collaborators backed by ESP-IDF.
struct EspBoard {
    console: UartConsole,
}

impl Board for EspBoard {
    fn set_led(&mut self, color: Rgb) {
        put_pixel(color);
    }

    fn random(&mut self, bound: u32) -> u32 {
        // SAFETY: esp_random has no preconditions.
        let raw = unsafe { esp_idf_sys::esp_random() };
        raw % bound.max(1)
    }

    fn console(&mut self) -> &mut dyn fmt::Write {
        &mut self.console
    }
}

/// Liveness sink: the ESP-IDF task watchdog.
struct TaskWatchdog;

impl Liveness for TaskWatchdog {
    fn feed(&mut self) {
        // SAFETY: resetting the WDT for the current task is always valid.
        unsafe {
            esp_idf_sys::esp_task_wdt_reset();
        }
    }
}

/// Input side: samples the button, classifies edges, fills the assembler.
///
/// In production the edge push happens in the GPIO ISR; the pump then
/// only drains the queue and polls the release timer.
struct InputPump {
    last_pressed: bool,
    overflow_reported: bool,
}

impl InputPump {
    const fn new() -> Self {
        Self {
            last_pressed: false,
            overflow_reported: false,
        }
    }

    fn pump(&mut self, timer: &mut EdgeTimer, asm: &mut InputAssembler, allow_spaces: bool) {
        let now = timestamp_ms();

        let pressed = poll_button_pressed();
        if pressed != self.last_pressed {
            let edge = if pressed {
                Edge::press(now)
            } else {
                Edge::release(now)
            };
            EDGE_QUEUE.push(edge);
            self.last_pressed = pressed;
        }

        while let Some(edge) = EDGE_QUEUE.pop() {
            let symbol = match edge.kind {
                EdgeKind::Press => {
                    timer.on_press(edge.at_ms);
                    None
                }
                EdgeKind::Release => timer.on_release(edge.at_ms),
            };
            if let Some(symbol) = symbol {
                self.dispatch(symbol, asm, allow_spaces);
            }
        }

        if let Some(symbol) = timer.poll(now) {
            self.dispatch(symbol, asm, allow_spaces);
        }
    }

    fn dispatch(&mut self, symbol: MorseSymbol, asm: &mut InputAssembler, allow_spaces: bool) {
        let mut echo = UartConsole;
        match asm.accept(symbol, allow_spaces) {
            Outcome::Echo(c) => {
                let _ = write!(echo, "{}", c);
            }
            Outcome::Ignored => {
                if asm.at_capacity() && !self.overflow_reported {
                    console::report_error(&mut echo, GameError::BufferOverflow);
                    self.overflow_reported = true;
                }
            }
            Outcome::Ready => {
                let _ = writeln!(echo);
                self.overflow_reported = false;
                READY.raise();
            }
        }
    }
}

#[no_mangle]
fn main() {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();

    let mut board = EspBoard {
        console: UartConsole,
    };
    let mut wdt = TaskWatchdog;
    let mut timer = EdgeTimer::new();
    let mut asm = InputAssembler::new();
    let mut pump = InputPump::new();
    let mut game = Game::new();

    let _ = writeln!(board.console(), "{}", env!("VERSION_STRING"));
    game.begin(&mut board);

    loop {
        let allow_spaces = game.allows_spaces();
        wait_ready(&READY, &mut wdt, || {
            pump.pump(&mut timer, &mut asm, allow_spaces);
            idle_tick();
        });

        let step = game.on_candidate(asm.candidate(), &mut board);
        asm.clear();

        if step == Step::SessionOver {
            break;
        }
    }

    put_pixel(Rgb::new(0, 0, 0));
}

// --- Thin hardware shims ---

fn timestamp_ms() -> i64 {
    // SAFETY: esp_timer_get_time has no preconditions.
    unsafe { esp_idf_sys::esp_timer_get_time() / 1000 }
}

fn poll_button_pressed() -> bool {
    // TODO: Read the button GPIO (active low) via esp-idf-hal
    false
}

fn put_pixel(_color: Rgb) {
    // TODO: Push the GRB word to the addressable LED via RMT
}

fn idle_tick() {
    // One tick between button samples keeps classification well inside
    // the 20 ms debounce floor.
    unsafe {
        esp_idf_sys::vTaskDelay(1);
    }
}
