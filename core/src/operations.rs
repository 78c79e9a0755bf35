use crate::constants::{MEMORY_SIZE, SPRITE_HEIGHT, SPRITE_SHEET_ADDRESS};
use crate::fault::Fault;
use crate::frame_buffer::{self, draw_sprite};
use crate::keypad::Keypad;
use crate::random::ByteSource;
use crate::state::{Effect, State};

// Every operation sees the program counter already advanced past its own opcode.

/// The address the executing instruction was fetched from.
fn current(state: &State) -> u16 {
    state.registers.pc.wrapping_sub(0x2)
}

/// Copies the state with a new set of V registers.
fn with_v(state: &State, v: [u8; 16]) -> State {
    let mut next = *state;
    next.registers.v = v;
    next
}

/// clear
pub fn clr(state: &State) -> Effect {
    Effect::next(State {
        frame_buffer: frame_buffer::blank(),
        ..*state
    })
    .redrawn()
}

/// PC = STACK.pop()
pub fn rts(state: &State) -> Result<Effect, Fault> {
    let mut stack = state.stack;
    let address = stack.pop(current(state))?;
    Ok(Effect::jump(State { stack, ..*state }, address))
}

/// PC = addr
pub fn jump(addr: u16, state: &State) -> Effect {
    Effect::jump(*state, addr)
}

/// STACK.push(PC); PC = addr
pub fn call(addr: u16, state: &State) -> Result<Effect, Fault> {
    let mut stack = state.stack;
    stack.push(state.registers.pc, current(state))?;
    Ok(Effect::jump(State { stack, ..*state }, addr))
}

/// if Vx == kk then pc += 2
pub fn ske(x: u8, kk: u8, state: &State) -> Effect {
    Effect::skip_if(*state, state.registers.v[x as usize] == kk)
}

/// if Vx != kk then pc += 2
pub fn skne(x: u8, kk: u8, state: &State) -> Effect {
    Effect::skip_if(*state, state.registers.v[x as usize] != kk)
}

/// if Vx == Vy then pc += 2
pub fn skre(x: u8, y: u8, state: &State) -> Effect {
    let v = state.registers.v;
    Effect::skip_if(*state, v[x as usize] == v[y as usize])
}

/// Vx = kk
pub fn load(x: u8, kk: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] = kk;
    Effect::next(with_v(state, v))
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it, VF is left alone
pub fn add(x: u8, kk: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] = v[x as usize].wrapping_add(kk);
    Effect::next(with_v(state, v))
}

/// Vx = Vy
pub fn mv(x: u8, y: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] = v[y as usize];
    Effect::next(with_v(state, v))
}

/// Vx |= Vy
pub fn or(x: u8, y: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] |= v[y as usize];
    Effect::next(with_v(state, v))
}

/// Vx &= Vy
pub fn and(x: u8, y: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] &= v[y as usize];
    Effect::next(with_v(state, v))
}

/// Vx ^= Vy
pub fn xor(x: u8, y: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] ^= v[y as usize];
    Effect::next(with_v(state, v))
}

// The arithmetic operations below write VF before Vx, so with x == 0xF the
// result wins over the flag.

/// Vx += Vy; VF = overflow
pub fn addr(x: u8, y: u8, state: &State) -> Effect {
    let (res, over) = state.registers.v[x as usize].overflowing_add(state.registers.v[y as usize]);
    let mut v = state.registers.v;
    v[0xF] = over as u8;
    v[x as usize] = res;
    Effect::next(with_v(state, v))
}

/// Vx -= Vy; VF = !underflow
pub fn sub(x: u8, y: u8, state: &State) -> Effect {
    let (res, under) = state.registers.v[x as usize].overflowing_sub(state.registers.v[y as usize]);
    let mut v = state.registers.v;
    v[0xF] = !under as u8;
    v[x as usize] = res;
    Effect::next(with_v(state, v))
}

/// Vx >>= 1; VF = shifted out bit
pub fn shr(x: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    let vx = v[x as usize];
    v[0xF] = vx & 0x1;
    v[x as usize] = vx >> 1;
    Effect::next(with_v(state, v))
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(x: u8, y: u8, state: &State) -> Effect {
    let (res, under) = state.registers.v[y as usize].overflowing_sub(state.registers.v[x as usize]);
    let mut v = state.registers.v;
    v[0xF] = !under as u8;
    v[x as usize] = res;
    Effect::next(with_v(state, v))
}

/// Vx <<= 1; VF = shifted out bit
pub fn shl(x: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    let vx = v[x as usize];
    v[0xF] = (vx >> 7) & 0x1;
    v[x as usize] = vx << 1;
    Effect::next(with_v(state, v))
}

/// if Vx != Vy then pc += 2
pub fn skrne(x: u8, y: u8, state: &State) -> Effect {
    let v = state.registers.v;
    Effect::skip_if(*state, v[x as usize] != v[y as usize])
}

/// I = addr
pub fn loadi(addr: u16, state: &State) -> Effect {
    let mut next = *state;
    next.registers.i = addr;
    Effect::next(next)
}

/// PC = V0 + addr
pub fn jumpi(addr: u16, state: &State) -> Effect {
    Effect::jump(*state, addr + u16::from(state.registers.v[0x0]))
}

/// Vx = rand_byte & kk
pub fn rand(x: u8, kk: u8, state: &State, rng: &mut dyn ByteSource) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] = rng.next_byte() & kk;
    Effect::next(with_v(state, v))
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position Vx, Vy on the FrameBuffer with wrapping.
/// VF = 1 if any pixels were erased, otherwise 0
pub fn draw(x: u8, y: u8, n: u8, state: &State) -> Effect {
    let (sprite, fault) = state
        .memory
        .span(state.registers.i as usize, n as usize);
    let (frame_buffer, collided) = draw_sprite(
        &state.frame_buffer,
        state.registers.v[x as usize] as usize,
        state.registers.v[y as usize] as usize,
        sprite,
    );
    let mut next = State {
        frame_buffer,
        ..*state
    };
    next.registers.v[0xF] = collided as u8;
    Effect::next(next).redrawn().with_fault(fault)
}

/// if Vx.pressed then pc += 2
pub fn skpr(x: u8, state: &State, keypad: &Keypad) -> Effect {
    Effect::skip_if(*state, keypad.is_pressed(state.registers.v[x as usize]))
}

/// if !Vx.pressed then pc += 2
pub fn skup(x: u8, state: &State, keypad: &Keypad) -> Effect {
    Effect::skip_if(*state, !keypad.is_pressed(state.registers.v[x as usize]))
}

/// Vx = DT
pub fn moved(x: u8, state: &State) -> Effect {
    let mut v = state.registers.v;
    v[x as usize] = state.timers.delay;
    Effect::next(with_v(state, v))
}

/// await keypress for Vx
pub fn keyd(x: u8, state: &State) -> Effect {
    Effect::await_key(*state, x)
}

/// DT = Vx
pub fn loads(x: u8, state: &State) -> Effect {
    let mut next = *state;
    next.timers.delay = state.registers.v[x as usize];
    Effect::next(next)
}

/// ST = Vx
pub fn ld(x: u8, state: &State) -> Effect {
    let mut next = *state;
    next.timers.sound = state.registers.v[x as usize];
    Effect::next(next)
}

/// I += Vx
/// Wraps around at the end of memory and reports when it did.
pub fn addi(x: u8, state: &State) -> Effect {
    let sum = state.registers.i as usize + state.registers.v[x as usize] as usize;
    let fault = if sum >= MEMORY_SIZE {
        Some(Fault::OutOfBounds { address: sum })
    } else {
        None
    };
    let mut next = *state;
    next.registers.i = (sum % MEMORY_SIZE) as u16;
    Effect::next(next).with_fault(fault)
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(x: u8, state: &State) -> Effect {
    let digit = u16::from(state.registers.v[x as usize] & 0xF);
    let mut next = *state;
    next.registers.i = SPRITE_SHEET_ADDRESS + digit * SPRITE_HEIGHT;
    Effect::next(next)
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(x: u8, state: &State) -> Effect {
    let vx = state.registers.v[x as usize];
    let bcd = [vx / 100 % 10, vx / 10 % 10, vx % 10];
    let mut memory = state.memory;
    let fault = memory.write_span(state.registers.i as usize, &bcd);
    Effect::next(State { memory, ..*state }).with_fault(fault)
}

/// mem[I..=I+x] = V0..=Vx
/// Fill memory starting at address i with V0..=Vx
pub fn stor(x: u8, state: &State) -> Effect {
    let mut memory = state.memory;
    let fault = memory.write_span(
        state.registers.i as usize,
        &state.registers.v[..=x as usize],
    );
    Effect::next(State { memory, ..*state }).with_fault(fault)
}

/// V0..=Vx = mem[I..=I+x]
/// Fill V0..=Vx with memory starting at address i
pub fn read(x: u8, state: &State) -> Effect {
    let (bytes, fault) = state
        .memory
        .span(state.registers.i as usize, x as usize + 1);
    let mut v = state.registers.v;
    v[..bytes.len()].copy_from_slice(bytes);
    Effect::next(with_v(state, v)).with_fault(fault)
}
