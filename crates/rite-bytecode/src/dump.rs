//! Human-readable module dump for inspection and debugging.

use std::fmt::Write as _;

use crate::instruction::{Instruction, summon_name};
use crate::module::{Module, VERSION, section};

/// Render a module as a section listing plus the decoded instruction
/// stream from its data section (when present).
pub fn dump(module: &Module) -> String {
    let mut out = String::new();

    writeln!(out, "module: {} bytes, version {}", module.len(), VERSION).unwrap();
    for s in module.sections() {
        writeln!(
            out,
            "  {:<8} (0x{:02x})  {:>3} bytes",
            section_name(s.id),
            s.id,
            s.body.len()
        )
        .unwrap();
    }

    let instructions = module.instructions();
    if !instructions.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "instructions:").unwrap();
        for (ordinal, instr) in instructions.iter().enumerate() {
            writeln!(out, "  {}  {}", ordinal, format_instruction(instr)).unwrap();
        }
    }

    out
}

fn section_name(id: u8) -> &'static str {
    match id {
        section::TYPE => "type",
        section::FUNCTION => "function",
        section::MEMORY => "memory",
        section::EXPORT => "export",
        section::CODE => "code",
        section::DATA => "data",
        _ => "custom",
    }
}

/// One instruction as mnemonic + operands.
pub fn format_instruction(instr: &Instruction) -> String {
    match instr {
        Instruction::Op { opcode, operands } => {
            if let Some(name) = summon_name(instr) {
                return format!("{} {}", opcode.mnemonic(), name);
            }
            let mut text = opcode.mnemonic().to_string();
            for byte in operands {
                write!(text, " 0x{byte:02x}").unwrap();
            }
            text
        }
        Instruction::Raw(byte) => format!("0x{byte:02x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::MAGIC;

    fn module_with_data(stream: &[u8]) -> Module {
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        let mut body = vec![0x01, 0x00, 0x41, 0x00, 0x0B];
        body.push(stream.len() as u8);
        body.extend_from_slice(stream);
        bytes.push(section::DATA);
        bytes.push(body.len() as u8);
        bytes.extend_from_slice(&body);
        Module::from_bytes(bytes).unwrap()
    }

    #[test]
    fn dump_lists_sections_and_instructions() {
        let module = module_with_data(&[0x01, 0xB0, 0x0C]);
        insta::assert_snapshot!(dump(&module), @r"
        module: 19 bytes, version 1
          data     (0x0b)    9 bytes

        instructions:
          0  RESONATE 0xb0
          1  PULSE
        ");
    }

    #[test]
    fn dump_without_data_section_omits_instructions() {
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        let module = Module::from_bytes(bytes).unwrap();
        assert_eq!(dump(&module), "module: 8 bytes, version 1\n");
    }

    #[test]
    fn format_covers_every_shape() {
        use crate::opcode::Opcode;

        let summon = Instruction::Op {
            opcode: Opcode::Summon,
            operands: vec![3, b's', b'u', b'n'],
        };
        assert_eq!(format_instruction(&summon), "SUMMON sun");
        assert_eq!(
            format_instruction(&Instruction::with_operand(Opcode::Remember, 0)),
            "REMEMBER 0x00"
        );
        assert_eq!(format_instruction(&Instruction::Raw(0x2A)), "0x2a");
    }
}
