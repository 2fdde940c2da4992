use std::collections::VecDeque;

use crate::Error;

use super::{inst::Instruction, mem::Memory};

pub trait ExecutionState {
    fn read_mem(&mut self, addr: usize) -> Result<i64, Error>;
    fn write_mem(&mut self, addr: usize, value: i64) -> Result<(), Error>;
    fn input(&mut self) -> Option<i64>;
    fn output(&mut self, value: i64);
    fn inst_p(&self) -> usize;
    fn inst_p_mut(&mut self) -> &mut usize;
    fn rel_base(&self) -> i64;
    fn rel_base_mut(&mut self) -> &mut i64;
    fn halt(&mut self);
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ProcessState {
    Ready,
    Block,
    Halt,
    Fault,
}

/// Outcome of a single executed instruction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepResult {
    Continue,
    Output(i64),
    NeedInput,
    Halt,
}

/// Reason a resumed process stopped.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RunResult {
    Output(i64),
    NeedInput,
    Halt,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ComputerConfig {
    pub enable_debug_output: bool,
    /// Maximum number of memory cells, unlimited if `None`.
    pub mem_limit: Option<usize>,
}

/// One running copy of an int code program.
///
/// Every computer owns its memory, so several computers built from the same
/// image never see each other's writes.
#[derive(Debug, Clone)]
pub struct IntCodeComputer {
    id: usize,
    config: ComputerConfig,
    state: ProcessState,
    inst_p: usize,
    rel_base: i64,
    mem: Memory,
    inputs: VecDeque<i64>,
    last_output: Option<i64>,
    step_count: usize,
}

impl IntCodeComputer {
    pub fn new(image: &[i64]) -> Self {
        Self::with_config(image, ComputerConfig::default())
    }

    pub fn with_config(image: &[i64], config: ComputerConfig) -> Self {
        IntCodeComputer {
            id: 0,
            config,
            state: ProcessState::Ready,
            inst_p: 0,
            rel_base: 0,
            mem: Memory::new(image, config.mem_limit),
            inputs: VecDeque::new(),
            last_output: None,
            step_count: 0,
        }
    }

    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == ProcessState::Halt
    }

    pub fn last_output(&self) -> Option<i64> {
        self.last_output
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn inst_p(&self) -> usize {
        self.inst_p
    }

    pub fn rel_base(&self) -> i64 {
        self.rel_base
    }

    /// Current memory, including any cells grown during execution.
    pub fn image(&self) -> &[i64] {
        self.mem.cells()
    }

    pub fn push_input(&mut self, value: i64) {
        self.inputs.push_back(value);
        if self.state == ProcessState::Block {
            self.state = ProcessState::Ready;
        }
    }

    /// Queues `input` if given, then runs until the next output, a missing input or halt.
    pub fn resume(&mut self, input: Option<i64>) -> Result<RunResult, Error> {
        self.check_runnable()?;
        if let Some(value) = input {
            self.push_input(value);
        }

        loop {
            match self.step()? {
                StepResult::Continue => (),
                StepResult::Output(value) => return Ok(RunResult::Output(value)),
                StepResult::NeedInput => return Ok(RunResult::NeedInput),
                StepResult::Halt => return Ok(RunResult::Halt),
            }
        }
    }

    /// Runs to halt with the queued inputs, returns every output in order.
    pub fn run_to_halt(&mut self) -> Result<Vec<i64>, Error> {
        let mut outputs = Vec::new();
        loop {
            match self.resume(None)? {
                RunResult::Output(value) => outputs.push(value),
                RunResult::NeedInput => return Err(Error::NotEnoughInput(self.inst_p)),
                RunResult::Halt => return Ok(outputs),
            }
        }
    }

    pub fn step(&mut self) -> Result<StepResult, Error> {
        self.check_runnable()?;

        let inst_p = self.inst_p;
        let res = Instruction::decode(self).and_then(|inst| {
            if self.config.enable_debug_output {
                println!(
                    "Process({}) step # {}: {:?} @ {}.",
                    self.id, self.step_count, inst, inst_p
                );
            }
            inst.execute(self)
        });

        match res {
            Ok(StepResult::NeedInput) => {
                self.state = ProcessState::Block;
                if self.config.enable_debug_output {
                    println!("Process({}) blocked by requiring input.", self.id);
                }
            }
            Ok(step_res) => {
                self.state = if step_res == StepResult::Halt {
                    ProcessState::Halt
                } else {
                    ProcessState::Ready
                };
                self.step_count += 1;
                if self.config.enable_debug_output && step_res == StepResult::Halt {
                    println!("Process({}) halt.", self.id);
                }
            }
            Err(ref e) => {
                self.state = ProcessState::Fault;
                if self.config.enable_debug_output {
                    println!("Process({}) stopped by error({}) @ {}.", self.id, e, inst_p);
                }
            }
        }

        res
    }

    fn check_runnable(&self) -> Result<(), Error> {
        match self.state {
            ProcessState::Halt => Err(Error::ResumeHaltedProcess(self.id)),
            ProcessState::Fault => Err(Error::ResumeFaultedProcess(self.id)),
            ProcessState::Ready | ProcessState::Block => Ok(()),
        }
    }
}

impl ExecutionState for IntCodeComputer {
    fn read_mem(&mut self, addr: usize) -> Result<i64, Error> {
        self.mem.read(addr)
    }

    fn write_mem(&mut self, addr: usize, value: i64) -> Result<(), Error> {
        self.mem.write(addr, value)
    }

    fn input(&mut self) -> Option<i64> {
        self.inputs.pop_front()
    }

    fn output(&mut self, value: i64) {
        self.last_output = Some(value);
    }

    fn inst_p(&self) -> usize {
        self.inst_p
    }

    fn inst_p_mut(&mut self) -> &mut usize {
        &mut self.inst_p
    }

    fn rel_base(&self) -> i64 {
        self.rel_base
    }

    fn rel_base_mut(&mut self) -> &mut i64 {
        &mut self.rel_base
    }

    fn halt(&mut self) {
        self.state = ProcessState::Halt;
    }
}
