use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod amp;
pub mod int_code;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyIntCode,
    MalformedIntCode(String),
    UnknownOpcode(i64, usize),
    UnknownParameterMode(i64, usize),
    ImmediateWriteParameter(usize),
    NegativeAddress(i64),
    ArithmeticOverflow(usize),
    MemoryLimitExceeded(usize, usize),
    OutOfMemory(usize),
    NotEnoughInput(usize),
    ResumeHaltedProcess(usize),
    ResumeFaultedProcess(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyIntCode => write!(f, "Get empty int code"),
            Error::MalformedIntCode(s) => {
                write!(f, "Failed to parse integer from string({})", s)
            }
            Error::UnknownOpcode(c, p) => {
                write!(f, "Unknown operation code({}) found at {}", c, p)
            }
            Error::UnknownParameterMode(m, p) => {
                write!(f, "Unknown parameter mode({}) found at {}", m, p)
            }
            Error::ImmediateWriteParameter(p) => write!(
                f,
                "Immediate parameter mode found for written parameter at {}",
                p
            ),
            Error::NegativeAddress(a) => write!(f, "Invalid negative memory address({})", a),
            Error::ArithmeticOverflow(p) => {
                write!(f, "Integer overflow in instruction at {}", p)
            }
            Error::MemoryLimitExceeded(a, l) => write!(
                f,
                "Memory address({}) exceeds the memory limit({})",
                a, l
            ),
            Error::OutOfMemory(a) => {
                write!(f, "Failed to allocate memory up to address({})", a)
            }
            Error::NotEnoughInput(p) => write!(
                f,
                "Not enough input for instruction at {}, inputs exhausted",
                p
            ),
            Error::ResumeHaltedProcess(id) => {
                write!(f, "Try to resume halted process({})", id)
            }
            Error::ResumeFaultedProcess(id) => {
                write!(f, "Try to resume process({}) stopped by error", id)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct RunArgs {
    pub input_path: PathBuf,
    /// Values queued as input before running, in order.
    #[arg(short, long = "input", value_delimiter = ',', allow_negative_numbers = true)]
    pub inputs: Vec<i64>,
    #[arg(short, long)]
    pub debug: bool,
    #[arg(long)]
    pub mem_limit: Option<usize>,
}

#[derive(Debug, Parser)]
pub struct AmpArgs {
    pub input_path: PathBuf,
    /// Phase setting for each amplifier; all permutations of the default phases are tried if absent.
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub phases: Option<Vec<i64>>,
    #[arg(short, long)]
    pub debug: bool,
    #[arg(long)]
    pub mem_limit: Option<usize>,
}
