// Library root
// -----------
// This crate exposes the calculator as a library; the binary
// (`main.rs`) only parses settings and wires stdin/stdout into `ui`.
//
// Module responsibilities:
// - `calculator`: the five integer operations and their failure mode.
// - `input`: token reading and the prompt-until-valid-integer loop.
// - `ui`: the menu state machine that ties input and arithmetic together.
// - `config`: command-line settings.
// - `logging`: stderr diagnostics setup.
pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;
pub mod ui;
