use std::{error, fmt::Display};

use rayon::prelude::*;

use crate::int_code::com::{ComputerConfig, IntCodeComputer, RunResult};

pub struct AmpSettings {
    settings: Vec<Vec<i64>>,
}

impl From<&[i64]> for AmpSettings {
    fn from(phases: &[i64]) -> Self {
        AmpSettings {
            settings: Self::gen_permutation(phases),
        }
    }
}

impl AmpSettings {
    pub fn iter(&self) -> impl Iterator<Item = &[i64]> {
        self.settings.iter().map(|s| s.as_slice())
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    fn gen_permutation(phases: &[i64]) -> Vec<Vec<i64>> {
        let mut permutations = Vec::new();
        if phases.is_empty() {
            return permutations;
        }

        let mut numbers = Vec::from(phases);
        let number_count = numbers.len();
        Self::gen_permutation_recur(&mut permutations, &mut numbers, number_count);
        permutations
    }

    // Heap's algorithm
    fn gen_permutation_recur(
        permutations: &mut Vec<Vec<i64>>,
        numbers: &mut [i64],
        cur_size: usize,
    ) {
        if cur_size <= 1 {
            permutations.push(Vec::from(&*numbers));
            return;
        }

        for i in 0..(cur_size - 1) {
            Self::gen_permutation_recur(permutations, numbers, cur_size - 1);
            if cur_size % 2 == 0 {
                numbers.swap(i, cur_size - 1);
            } else {
                numbers.swap(0, cur_size - 1);
            }
        }
        Self::gen_permutation_recur(permutations, numbers, cur_size - 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmpMode {
    Chain,
    Loop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptySettings,
    AmplifierBlocked(usize),
    EmptyAmplifierOutput(usize),
    AmplifierHaltedEarly(usize),
    ExecutionError(crate::Error, Vec<i64>),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptySettings => write!(f, "Got no phase setting for amplifiers"),
            Error::AmplifierBlocked(ind) => {
                write!(f, "Amplifier #{} blocked by requiring input", ind)
            }
            Error::EmptyAmplifierOutput(ind) => {
                write!(f, "Amplifier #{} halted without any output", ind)
            }
            Error::AmplifierHaltedEarly(ind) => write!(
                f,
                "Amplifier #{} halted before the last amplifier in loop",
                ind
            ),
            Error::ExecutionError(e, s) => write!(
                f,
                "Error({}) in execution of amplifiers with settings({:?})",
                e, s
            ),
        }
    }
}

impl error::Error for Error {}

fn new_amps(int_code: &[i64], settings: &[i64], config: ComputerConfig) -> Vec<IntCodeComputer> {
    settings
        .iter()
        .enumerate()
        .map(|(ind, &phase)| {
            let mut amp = IntCodeComputer::with_config(int_code, config).with_id(ind);
            amp.push_input(phase);
            amp
        })
        .collect()
}

pub fn amp_chain(int_code: &[i64], settings: &[i64], config: ComputerConfig) -> Result<i64, Error> {
    if settings.is_empty() {
        return Err(Error::EmptySettings);
    }

    let mut signal = 0;
    for (ind, mut amp) in new_amps(int_code, settings, config).into_iter().enumerate() {
        signal = match amp
            .resume(Some(signal))
            .map_err(|e| Error::ExecutionError(e, Vec::from(settings)))?
        {
            RunResult::Output(value) => value,
            RunResult::NeedInput => return Err(Error::AmplifierBlocked(ind)),
            RunResult::Halt => return Err(Error::EmptyAmplifierOutput(ind)),
        };
    }

    Ok(signal)
}

pub fn amp_loop(int_code: &[i64], settings: &[i64], config: ComputerConfig) -> Result<i64, Error> {
    if settings.is_empty() {
        return Err(Error::EmptySettings);
    }

    let mut amps = new_amps(int_code, settings, config);
    let last_ind = amps.len() - 1;
    let mut signal = 0;
    loop {
        for (ind, amp) in amps.iter_mut().enumerate() {
            if amp.is_halted() {
                return Err(Error::AmplifierHaltedEarly(ind));
            }

            match amp
                .resume(Some(signal))
                .map_err(|e| Error::ExecutionError(e, Vec::from(settings)))?
            {
                RunResult::Output(value) => signal = value,
                RunResult::NeedInput => return Err(Error::AmplifierBlocked(ind)),
                RunResult::Halt if ind == last_ind => {
                    return amp.last_output().ok_or(Error::EmptyAmplifierOutput(ind));
                }
                RunResult::Halt => signal = amp.last_output().unwrap_or(signal),
            }
        }
    }
}

/// Tries every permutation of `phases`, returns the maximum signal and the setting producing it.
pub fn find_max_signal(
    int_code: &[i64],
    phases: &[i64],
    mode: AmpMode,
    config: ComputerConfig,
) -> Result<(i64, Vec<i64>), Error> {
    let run_amps: fn(&[i64], &[i64], ComputerConfig) -> Result<i64, Error> = match mode {
        AmpMode::Chain => amp_chain,
        AmpMode::Loop => amp_loop,
    };

    AmpSettings::from(phases)
        .settings
        .into_par_iter()
        .map(|setting| run_amps(int_code, &setting, config).map(|signal| (signal, setting)))
        .collect::<Result<Vec<_>, Error>>()?
        .into_iter()
        .max_by_key(|(signal, _)| *signal)
        .ok_or(Error::EmptySettings)
}
