use std::path::PathBuf;

use clap::Parser;

use emu8_core::constants::DEFAULT_CYCLES_PER_FRAME;

const DEFAULT_SCALE: u32 = 10;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "chip8", version, about = "Runs a Chip-8 ROM")]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per 60Hz frame
    #[arg(short, long, default_value_t = DEFAULT_CYCLES_PER_FRAME)]
    cycles_per_frame: u32,

    /// Size of a Chip-8 pixel on screen
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Don't play a tone while the sound timer runs
    #[arg(short, long)]
    mute: bool,
}

/// Everything `run` needs to know about how to run a ROM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rom: PathBuf,
    pub cycles_per_frame: u32,
    pub scale: u32,
    pub mute: bool,
}

impl Settings {
    /// Parses settings from an argument list; the first item is the program name.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        Ok(Settings {
            rom: args.rom,
            cycles_per_frame: args.cycles_per_frame.max(1),
            scale: args.scale.max(1),
            mute: args.mute,
        })
    }
}
