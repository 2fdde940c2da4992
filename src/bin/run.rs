use anyhow::{Context, Result};
use clap::Parser;
use intcode::{
    int_code::{
        com::{ComputerConfig, IntCodeComputer},
        read_int_code,
    },
    RunArgs,
};

fn main() -> Result<()> {
    let args = RunArgs::parse();
    let int_code = read_int_code(&args.input_path)?;
    let config = ComputerConfig {
        enable_debug_output: args.debug,
        mem_limit: args.mem_limit,
    };

    let mut computer = IntCodeComputer::with_config(&int_code, config);
    for &input in &args.inputs {
        computer.push_input(input);
    }
    let outputs = computer.run_to_halt().with_context(|| {
        format!(
            "Failed to run int code from file({}) with inputs({:?}).",
            args.input_path.display(),
            args.inputs
        )
    })?;
    println!(
        "Program halted after {} steps, get outputs({}).",
        computer.step_count(),
        outputs
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );

    Ok(())
}
