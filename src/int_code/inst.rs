use int_enum::IntEnum;

use crate::Error;

use super::com::{ExecutionState, StepResult};

#[repr(u8)]
#[derive(Debug, Clone, Copy, IntEnum, PartialEq, Eq)]
pub enum ParameterMode {
    Position = 0,
    Immediate = 1,
    Relative = 2,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
pub enum Opcode {
    Add = 1,
    Multiply = 2,
    Input = 3,
    Output = 4,
    JumpIfTrue = 5,
    JumpIfFalse = 6,
    LessThan = 7,
    Equals = 8,
    AdjustRelativeBase = 9,
    Halt = 99,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRole {
    Read,
    Write,
}

impl Opcode {
    pub fn param_roles(self) -> &'static [ParamRole] {
        use ParamRole::{Read, Write};

        match self {
            Opcode::Add | Opcode::Multiply | Opcode::LessThan | Opcode::Equals => {
                &[Read, Read, Write]
            }
            Opcode::Input => &[Write],
            Opcode::Output | Opcode::AdjustRelativeBase => &[Read],
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => &[Read, Read],
            Opcode::Halt => &[],
        }
    }

    /// Words taken by the instruction, opcode included.
    pub fn length(self) -> usize {
        1 + self.param_roles().len()
    }

    fn from_word(word: i64) -> Option<Self> {
        if word < 0 {
            return None;
        }

        u8::try_from(word % 100)
            .ok()
            .and_then(|n| Opcode::try_from(n).ok())
    }
}

const MAX_PARAM_COUNT: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    opcode: Opcode,
    params: [i64; MAX_PARAM_COUNT],
    param_modes: [ParameterMode; MAX_PARAM_COUNT],
}

impl Instruction {
    /// Decodes the instruction at the current instruction pointer.
    ///
    /// Opcode and every parameter mode are checked before any parameter word is
    /// read, so a malformed instruction fails before it can change memory.
    pub fn decode(exe_state: &mut dyn ExecutionState) -> Result<Self, Error> {
        let inst_p = exe_state.inst_p();
        let word = exe_state.read_mem(inst_p)?;
        let opcode = Opcode::from_word(word).ok_or(Error::UnknownOpcode(word % 100, inst_p))?;

        let mut inst = Instruction {
            opcode,
            params: [0; MAX_PARAM_COUNT],
            param_modes: [ParameterMode::Position; MAX_PARAM_COUNT],
        };
        let roles = opcode.param_roles();
        let mut mode_digits = word / 100;
        for (i, role) in roles.iter().enumerate() {
            let digit = mode_digits % 10;
            mode_digits /= 10;

            let mode = ParameterMode::try_from(digit as u8)
                .map_err(|_| Error::UnknownParameterMode(digit, inst_p))?;
            if *role == ParamRole::Write && mode == ParameterMode::Immediate {
                return Err(Error::ImmediateWriteParameter(inst_p));
            }
            inst.param_modes[i] = mode;
        }

        for i in 0..roles.len() {
            // Skip operation code
            inst.params[i] = exe_state.read_mem(inst_p + 1 + i)?;
        }

        Ok(inst)
    }

    pub fn execute(&self, exe_state: &mut dyn ExecutionState) -> Result<StepResult, Error> {
        let inst_p = exe_state.inst_p();
        match self.opcode {
            Opcode::Add => {
                let value = self
                    .read_param(exe_state, 0)?
                    .checked_add(self.read_param(exe_state, 1)?)
                    .ok_or(Error::ArithmeticOverflow(inst_p))?;
                self.write_param(exe_state, 2, value)?;
            }
            Opcode::Multiply => {
                let value = self
                    .read_param(exe_state, 0)?
                    .checked_mul(self.read_param(exe_state, 1)?)
                    .ok_or(Error::ArithmeticOverflow(inst_p))?;
                self.write_param(exe_state, 2, value)?;
            }
            Opcode::Input => {
                let Some(value) = exe_state.input() else {
                    // Retried from the same instruction once input arrives
                    return Ok(StepResult::NeedInput);
                };
                self.write_param(exe_state, 0, value)?;
            }
            Opcode::Output => {
                let value = self.read_param(exe_state, 0)?;
                exe_state.output(value);
                self.forward_inst_p(exe_state);
                return Ok(StepResult::Output(value));
            }
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => {
                let condition = self.read_param(exe_state, 0)?;
                if (condition != 0) == (self.opcode == Opcode::JumpIfTrue) {
                    let target = self.read_param(exe_state, 1)?;
                    *exe_state.inst_p_mut() =
                        usize::try_from(target).map_err(|_| Error::NegativeAddress(target))?;
                    return Ok(StepResult::Continue);
                }
            }
            Opcode::LessThan => {
                let input0 = self.read_param(exe_state, 0)?;
                let input1 = self.read_param(exe_state, 1)?;
                self.write_param(exe_state, 2, if input0 < input1 { 1 } else { 0 })?;
            }
            Opcode::Equals => {
                let input0 = self.read_param(exe_state, 0)?;
                let input1 = self.read_param(exe_state, 1)?;
                self.write_param(exe_state, 2, if input0 == input1 { 1 } else { 0 })?;
            }
            Opcode::AdjustRelativeBase => {
                let offset = self.read_param(exe_state, 0)?;
                let rel_base = exe_state
                    .rel_base()
                    .checked_add(offset)
                    .ok_or(Error::ArithmeticOverflow(inst_p))?;
                *exe_state.rel_base_mut() = rel_base;
            }
            Opcode::Halt => {
                exe_state.halt();
                return Ok(StepResult::Halt);
            }
        }

        self.forward_inst_p(exe_state);
        Ok(StepResult::Continue)
    }

    fn forward_inst_p(&self, exe_state: &mut dyn ExecutionState) {
        *exe_state.inst_p_mut() += self.opcode.length();
    }

    fn read_param(&self, exe_state: &mut dyn ExecutionState, ind: usize) -> Result<i64, Error> {
        match self.param_modes[ind] {
            ParameterMode::Immediate => Ok(self.params[ind]),
            ParameterMode::Position | ParameterMode::Relative => {
                let addr = self.param_address(exe_state, ind)?;
                exe_state.read_mem(addr)
            }
        }
    }

    fn write_param(
        &self,
        exe_state: &mut dyn ExecutionState,
        ind: usize,
        value: i64,
    ) -> Result<(), Error> {
        let addr = self.param_address(exe_state, ind)?;
        exe_state.write_mem(addr, value)
    }

    fn param_address(&self, exe_state: &dyn ExecutionState, ind: usize) -> Result<usize, Error> {
        let param = self.params[ind];
        let pos = match self.param_modes[ind] {
            ParameterMode::Position => param,
            ParameterMode::Relative => exe_state
                .rel_base()
                .checked_add(param)
                .ok_or(Error::ArithmeticOverflow(exe_state.inst_p()))?,
            ParameterMode::Immediate => {
                return Err(Error::ImmediateWriteParameter(exe_state.inst_p()))
            }
        };

        usize::try_from(pos).map_err(|_| Error::NegativeAddress(pos))
    }
}
