use chip8vm::machine::ascii_display;
use chip8vm::machine::chip::Chip;
use chip8vm::machine::runner;
use std::time::Duration;
use std::{env, fs::File, io::Read, process};

const INSTRUCTION_SLEEP: Duration = Duration::from_micros(500);

fn load_rom_file(filename: &str) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(filename)?;
    let mut raw_rom = Vec::new();
    file.read_to_end(&mut raw_rom)?;
    Ok(raw_rom)
}

fn main() {
    let rom_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: chip8vm-bin <rom>");
            process::exit(1);
        }
    };
    let program = match load_rom_file(&rom_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {}: {}", rom_path, err);
            process::exit(1);
        }
    };
    let mut chip = match Chip::new(&program) {
        Ok(chip) => chip,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    if let Err(err) = runner::run_until_idle(&mut chip, INSTRUCTION_SLEEP) {
        eprintln!("machine fault: {}", err);
        process::exit(1);
    }
    ascii_display::draw_screen(chip.screen());
}
