use anyhow::Result;
use clap::Parser;
use intcode::{
    amp::{amp_loop, find_max_signal, AmpMode},
    int_code::{com::ComputerConfig, read_int_code},
    AmpArgs,
};

fn main() -> Result<()> {
    let args = AmpArgs::parse();
    let int_code = read_int_code(&args.input_path)?;
    let config = ComputerConfig {
        enable_debug_output: args.debug,
        mem_limit: args.mem_limit,
    };

    match args.phases {
        Some(setting) => {
            let output_signal = amp_loop(&int_code, &setting, config)?;
            println!(
                "The output signal of amplifier loop with setting({:?}) is {}.",
                setting, output_signal
            );
        }
        None => {
            let phases = (5..10).collect::<Vec<i64>>();
            let (max_output_signal, max_output_setting) =
                find_max_signal(&int_code, &phases, AmpMode::Loop, config)?;
            println!(
                "The maximum output signal({}) of amplifier loop can be achieved by setting({:?}).",
                max_output_signal, max_output_setting
            );
        }
    }

    Ok(())
}
