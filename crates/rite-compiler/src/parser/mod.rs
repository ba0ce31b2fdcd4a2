//! Line parser: tokens → instructions.
//!
//! One instruction per line. The first word names the opcode
//! (case-insensitively); the rest of the line supplies operands. Parsing is
//! total: blank lines, comments, and unknown mnemonics produce nothing, and
//! malformed numeric operands fall back to their documented defaults.

mod lexer;

pub use lexer::{Token, TokenKind, lex, token_text};

use rite_bytecode::Instruction;
use rite_bytecode::Opcode;
use rite_bytecode::opcode::{DEFAULT_ADDRESS, DEFAULT_AGENT, DEFAULT_CYCLES, DEFAULT_FREQUENCY};

/// Names longer than this are cut before encoding; the length prefix is a
/// single byte.
const MAX_NAME_LEN: usize = 255;

/// Parse source text into an instruction sequence.
///
/// A pure function of the input; never fails.
pub fn parse(source: &str) -> Vec<Instruction> {
    let tokens = lex(source);
    let mut instructions = Vec::new();

    for line in tokens.split(|t| t.kind == TokenKind::Newline) {
        let words: Vec<&Token> = line
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Word | TokenKind::HexByte))
            .collect();
        let Some((head, args)) = words.split_first() else {
            continue;
        };

        if head.kind == TokenKind::HexByte {
            let text = token_text(source, head);
            instructions.push(Instruction::Raw(parse_hex_byte(text)));
            continue;
        }

        let Some(opcode) = Opcode::from_mnemonic(token_text(source, head)) else {
            // Unknown mnemonics are no-ops by design.
            continue;
        };

        let arg = args.first().map(|t| token_text(source, t));
        instructions.push(build(opcode, arg));
    }

    instructions
}

fn build(opcode: Opcode, arg: Option<&str>) -> Instruction {
    match opcode {
        Opcode::Resonate => Instruction::with_operand(opcode, int_operand(arg, DEFAULT_FREQUENCY)),
        Opcode::Breathe => Instruction::with_operand(opcode, int_operand(arg, DEFAULT_CYCLES)),
        Opcode::Remember => Instruction::with_operand(opcode, int_operand(arg, DEFAULT_ADDRESS)),
        Opcode::Collapse => {
            // First character of the operand, truncated to a byte.
            let code = arg
                .and_then(|a| a.chars().next())
                .map(|c| c as u32 as u8)
                .unwrap_or(0);
            Instruction::with_operand(opcode, code)
        }
        Opcode::Summon => {
            let name = arg.unwrap_or(DEFAULT_AGENT);
            let bytes: Vec<u8> = name
                .chars()
                .take(MAX_NAME_LEN)
                .map(|c| c as u32 as u8)
                .collect();
            let mut operands = Vec::with_capacity(1 + bytes.len());
            operands.push(bytes.len() as u8);
            operands.extend(bytes);
            Instruction::Op { opcode, operands }
        }
        _ => Instruction::op(opcode),
    }
}

/// Integer operand, truncated to a byte; malformed or absent input falls
/// back to the opcode's default.
fn int_operand(arg: Option<&str>, default: i64) -> u8 {
    arg.and_then(parse_int).unwrap_or(default) as u8
}

/// Decimal or `0x`-prefixed integer.
fn parse_int(text: &str) -> Option<i64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn parse_hex_byte(text: &str) -> u8 {
    // The lexer guarantees a `0x` prefix and at least one hex digit.
    u64::from_str_radix(&text[2..], 16).map_or(0, |v| v as u8)
}
