use std::process;

use log::{error, info};

use emu8_core::Chip8;

mod keymap;
mod rom;
mod run;
mod settings;

use settings::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match Settings::try_parse_from(std::env::args_os()) {
        Ok(settings) => settings,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let mut chip8 = Chip8::new();
    if let Err(e) = rom::load(&mut chip8, &settings.rom) {
        error!("{}", e);
        process::exit(1);
    }
    info!("running {}", settings.rom.display());

    if let Err(e) = run::run(&mut chip8, &settings) {
        error!("{}", e);
        process::exit(1);
    }
}
