use emu8_core::constants::{DISPLAY_WIDTH, MAX_ROM_SIZE, PROGRAM_START, SPRITE_SHEET};
use emu8_core::frame_buffer;
use emu8_core::{Chip8, Cycle, Fault, Instruction};
use rand::rngs::mock::StepRng;

fn boot(rom: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::with_random_source(StepRng::new(0, 0));
    chip8.load_program(rom).unwrap();
    chip8
}

fn run(chip8: &mut Chip8, cycles: usize) {
    for _ in 0..cycles {
        chip8.cycle().unwrap();
    }
}

#[test]
fn test_rom_lands_at_program_start_above_sprite_sheet() {
    for &len in &[0, 1, 2, 255, 0x400, MAX_ROM_SIZE] {
        let rom: Vec<u8> = (0..len).map(|n| (n * 7 + 3) as u8).collect();
        let chip8 = boot(&rom);
        let memory = chip8.memory().as_slice();
        assert_eq!(memory[0x200..0x200 + len], rom[..]);
        assert_eq!(memory[..80], SPRITE_SHEET[..]);
        assert!(memory[80..0x200].iter().all(|&b| b == 0));
        assert!(memory[0x200 + len..].iter().all(|&b| b == 0));
    }
}

#[test]
fn test_oversized_rom_is_rejected() {
    let mut chip8 = Chip8::new();
    let rom = vec![0x12; MAX_ROM_SIZE + 1];
    assert_eq!(
        chip8.load_program(&rom),
        Err(Fault::RomTooLarge {
            size: 3585,
            max: 3584
        })
    );
}

#[test]
fn test_clear_blanks_any_frame() {
    // LD I, sprite 0; DRW V0, V0, 5; LD V1, 0x3C; DRW V1, V1, 5; CLS
    let mut chip8 = boot(&[0xA0, 0x00, 0xD0, 0x05, 0x61, 0x3C, 0xD1, 0x15, 0x00, 0xE0]);
    run(&mut chip8, 4);
    assert!(frame_buffer::lit(&chip8.framebuffer()) > 0);
    run(&mut chip8, 1);
    assert_eq!(chip8.framebuffer(), frame_buffer::blank());
}

#[test]
fn test_add_registers() {
    // LD V0, 5; LD V1, 10; ADD V0, V1
    let mut chip8 = boot(&[0x60, 0x05, 0x61, 0x0A, 0x80, 0x14]);
    run(&mut chip8, 3);
    assert_eq!(chip8.registers().v[0x0], 15);
    assert_eq!(chip8.registers().vf(), 0);
    assert_eq!(chip8.registers().pc, PROGRAM_START + 6);
}

#[test]
fn test_add_immediate_wraps_without_flag() {
    // LD VF, 0x01; ADD V0, 0xFF; ADD V0, 0x01
    let mut chip8 = boot(&[0x6F, 0x01, 0x70, 0xFF, 0x70, 0x01]);
    run(&mut chip8, 2);
    assert_eq!(chip8.registers().v[0x0], 0xFF);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().v[0x0], 0x00);
    assert_eq!(chip8.registers().vf(), 0x01);
}

#[test]
fn test_add_registers_carry() {
    // LD V0, 0xFF; LD V1, 0x01; ADD V0, V1; LD V2, 0x01; ADD V2, V1
    let mut chip8 = boot(&[0x60, 0xFF, 0x61, 0x01, 0x80, 0x14, 0x62, 0x01, 0x82, 0x14]);
    run(&mut chip8, 3);
    assert_eq!(chip8.registers().v[0x0], 0x00);
    assert_eq!(chip8.registers().vf(), 1);
    run(&mut chip8, 2);
    assert_eq!(chip8.registers().v[0x2], 0x02);
    assert_eq!(chip8.registers().vf(), 0);
}

#[test]
fn test_sprite_wraps_horizontally() {
    // LD V0, 60; LD V1, 0; LD I, 0x20A; DRW V0, V1, 1; (data) 0xFF
    let mut chip8 = boot(&[0x60, 0x3C, 0x61, 0x00, 0xA2, 0x0A, 0xD0, 0x11, 0x12, 0x08, 0xFF]);
    run(&mut chip8, 4);
    let frame = chip8.framebuffer();
    let lit: Vec<usize> = (0..DISPLAY_WIDTH).filter(|&x| frame[0][x]).collect();
    assert_eq!(lit, vec![0, 1, 2, 3, 60, 61, 62, 63]);
    assert_eq!(frame_buffer::lit(&frame), 8);
}

#[test]
fn test_drawing_twice_reports_collision() {
    // LD I, sprite 0; DRW V0, V0, 5; DRW V0, V0, 5
    let mut chip8 = boot(&[0xA0, 0x00, 0xD0, 0x05, 0xD0, 0x05]);
    run(&mut chip8, 2);
    assert_eq!(chip8.registers().vf(), 0);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().vf(), 1);
    assert_eq!(chip8.framebuffer(), frame_buffer::blank());
}

#[test]
fn test_return_resumes_after_call() {
    // 0x200: CALL 0x206; 0x202: LD V0, 1; 0x204: JP 0x204; 0x206: RET
    let mut chip8 = boot(&[0x22, 0x06, 0x60, 0x01, 0x12, 0x04, 0x00, 0xEE]);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().pc, 0x206);
    assert_eq!(chip8.stack().frames(), &[0x202]);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().pc, 0x202);
    assert_eq!(chip8.stack().sp(), 0);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().v[0x0], 1);
}

#[test]
fn test_random_is_masked() {
    for &random in &[0x00u64, 0x0F, 0x3C, 0xA5, 0xFF] {
        // RND V0, 0x5A
        let mut chip8 = Chip8::with_random_source(StepRng::new(random, 0));
        chip8.load_program(&[0xC0, 0x5A]).unwrap();
        run(&mut chip8, 1);
        let v0 = chip8.registers().v[0x0];
        assert_eq!(v0 & !0x5A, 0);
        assert_eq!(v0, random as u8 & 0x5A);
    }
}

#[test]
fn test_wait_for_key() {
    // LD V3, K; LD V4, 0x44
    let mut chip8 = boot(&[0xF3, 0x0A, 0x64, 0x44]);
    assert_eq!(
        chip8.cycle(),
        Ok(Cycle::Executed(Instruction::AwaitKey { x: 0x3 }))
    );
    for _ in 0..5 {
        assert_eq!(chip8.cycle(), Ok(Cycle::AwaitingKey));
        assert_eq!(chip8.registers().pc, 0x202);
    }
    // timers keep running while waiting
    chip8.tick();
    chip8.set_key(0x9, true);
    assert_eq!(chip8.registers().v[0x3], 0x9);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().v[0x4], 0x44);
    assert_eq!(chip8.registers().pc, 0x204);
}

#[test]
fn test_skip_on_key() {
    // LD V0, 0xA; SKP V0; LD V1, 1; SKNP V0; LD V2, 1
    let mut chip8 = boot(&[0x60, 0x0A, 0xE0, 0x9E, 0x61, 0x01, 0xE0, 0xA1, 0x62, 0x01]);
    chip8.set_key(0xA, true);
    run(&mut chip8, 2);
    assert_eq!(chip8.registers().pc, 0x206);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().pc, 0x208);
    assert_eq!(chip8.registers().v[0x1], 0);
    chip8.set_key(0xA, false);
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().v[0x2], 1);
}

#[test]
fn test_bcd_store_and_read_back() {
    // LD V5, 254; LD I, 0x300; LD B, V5; LD V2, [I]
    let mut chip8 = boot(&[0x65, 0xFE, 0xA3, 0x00, 0xF5, 0x33, 0xF2, 0x65]);
    run(&mut chip8, 4);
    assert_eq!(chip8.memory().as_slice()[0x300..0x303], [2, 5, 4]);
    assert_eq!(chip8.registers().v[0x0..0x3], [2, 5, 4]);
    assert_eq!(chip8.registers().v[0x5], 254);
}

#[test]
fn test_font_glyph_draws_digit() {
    // LD V0, 0x7; LD F, V0; DRW V1, V1, 5
    let mut chip8 = boot(&[0x60, 0x07, 0xF0, 0x29, 0xD1, 0x15]);
    run(&mut chip8, 3);
    let frame = chip8.framebuffer();
    // 7 is 0xF0, 0x10, 0x20, 0x40, 0x40
    assert_eq!(frame[0][0..4], [true, true, true, true]);
    assert_eq!(frame[1][0..4], [false, false, false, true]);
    assert_eq!(frame[4][0..4], [false, true, false, false]);
}

#[test]
fn test_unknown_opcode_keeps_running() {
    // (unknown) 0x8008; LD V0, 1
    let mut chip8 = boot(&[0x80, 0x08, 0x60, 0x01]);
    assert!(matches!(
        chip8.cycle(),
        Ok(Cycle::Recovered(Fault::UnknownOpcode { opcode: 0x8008, .. }))
    ));
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().v[0x0], 1);
}

#[test]
fn test_clamped_store_keeps_running() {
    // LD I, 0xFFF; ADD I, V0 (V0 = 0); LD [I], V3; LD V0, 1
    let mut chip8 = boot(&[0xAF, 0xFF, 0xF0, 0x1E, 0xF3, 0x55, 0x60, 0x01]);
    run(&mut chip8, 2);
    assert_eq!(
        chip8.cycle(),
        Ok(Cycle::Recovered(Fault::OutOfBounds { address: 0x1000 }))
    );
    run(&mut chip8, 1);
    assert_eq!(chip8.registers().v[0x0], 1);
    assert!(chip8.halted().is_none());
}

#[test]
fn test_stores_into_sprite_sheet_are_dropped() {
    // LD V0, 0xAA; LD I, 0x000; LD [I], V0; LD V1, 7; LD I, 0x010; LD B, V1
    let mut chip8 = boot(&[0x60, 0xAA, 0xA0, 0x00, 0xF0, 0x55, 0x61, 0x07, 0xA0, 0x10, 0xF1, 0x33]);
    run(&mut chip8, 2);
    assert_eq!(
        chip8.cycle(),
        Ok(Cycle::Recovered(Fault::OutOfBounds { address: 0x000 }))
    );
    run(&mut chip8, 2);
    assert_eq!(
        chip8.cycle(),
        Ok(Cycle::Recovered(Fault::OutOfBounds { address: 0x010 }))
    );
    assert_eq!(chip8.memory().as_slice()[..80], SPRITE_SHEET[..]);
    assert!(chip8.halted().is_none());
}
