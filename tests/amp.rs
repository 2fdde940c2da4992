use intcode::{
    amp::{amp_chain, amp_loop, find_max_signal, AmpMode, AmpSettings, Error},
    int_code::com::ComputerConfig,
};

const CHAIN_CODE: [i64; 17] = [3, 15, 3, 16, 1002, 16, 10, 16, 1, 16, 15, 15, 4, 15, 99, 0, 0];
const LOOP_CODE: [i64; 29] = [
    3, 26, 1001, 26, -4, 26, 3, 27, 1002, 27, 2, 27, 1, 27, 26, 27, 4, 27, 1001, 28, -1, 28, 1005,
    28, 6, 99, 0, 0, 5,
];

#[test]
fn settings_cover_all_permutations() {
    let settings = AmpSettings::from([0, 1, 2, 3].as_slice());
    let mut all = settings.iter().map(|s| s.to_vec()).collect::<Vec<_>>();

    assert_eq!(settings.len(), 24);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 24);
    assert!(AmpSettings::from(&[] as &[i64]).is_empty());
}

#[test]
fn chain_output_right_signal() {
    assert_eq!(
        amp_chain(&CHAIN_CODE, &[4, 3, 2, 1, 0], ComputerConfig::default()),
        Ok(43210)
    );

    let int_code = [
        3, 23, 3, 24, 1002, 24, 10, 24, 1002, 23, -1, 23, 101, 5, 23, 23, 1, 24, 23, 23, 4, 23, 99,
        0, 0,
    ];
    assert_eq!(
        amp_chain(&int_code, &[0, 1, 2, 3, 4], ComputerConfig::default()),
        Ok(54321)
    );

    let int_code = [
        3, 31, 3, 32, 1002, 32, 10, 32, 1001, 31, -2, 31, 1007, 31, 0, 33, 1002, 33, 7, 33, 1, 33,
        31, 31, 1, 32, 31, 31, 4, 31, 99, 0, 0, 0,
    ];
    assert_eq!(
        amp_chain(&int_code, &[1, 0, 4, 3, 2], ComputerConfig::default()),
        Ok(65210)
    );
}

#[test]
fn loop_output_right_signal() {
    assert_eq!(
        amp_loop(&LOOP_CODE, &[9, 8, 7, 6, 5], ComputerConfig::default()),
        Ok(139629729)
    );

    let int_code = [
        3, 52, 1001, 52, -5, 52, 3, 53, 1, 52, 56, 54, 1007, 54, 5, 55, 1005, 55, 26, 1001, 54, -5,
        54, 1105, 1, 12, 1, 53, 54, 53, 1008, 54, 0, 55, 1001, 55, 1, 55, 2, 53, 55, 53, 4, 53,
        1001, 56, -1, 56, 1005, 56, 6, 99, 0, 0, 0, 0, 10,
    ];
    assert_eq!(
        amp_loop(&int_code, &[9, 7, 8, 5, 6], ComputerConfig::default()),
        Ok(18216)
    );
}

#[test]
fn max_signal_found_over_permutations() {
    let phases = (0..5).collect::<Vec<i64>>();
    assert_eq!(
        find_max_signal(&CHAIN_CODE, &phases, AmpMode::Chain, ComputerConfig::default()),
        Ok((43210, vec![4, 3, 2, 1, 0]))
    );

    let phases = (5..10).collect::<Vec<i64>>();
    assert_eq!(
        find_max_signal(&LOOP_CODE, &phases, AmpMode::Loop, ComputerConfig::default()),
        Ok((139629729, vec![9, 8, 7, 6, 5]))
    );
}

#[test]
fn empty_settings_rejected() {
    assert_eq!(
        amp_chain(&CHAIN_CODE, &[], ComputerConfig::default()),
        Err(Error::EmptySettings)
    );
    assert_eq!(
        amp_loop(&LOOP_CODE, &[], ComputerConfig::default()),
        Err(Error::EmptySettings)
    );
    assert_eq!(
        find_max_signal(&CHAIN_CODE, &[], AmpMode::Chain, ComputerConfig::default()),
        Err(Error::EmptySettings)
    );
}

#[test]
fn amplifier_failures_reported() {
    // Reads the phase, then waits for a second input forever
    let int_code = [3, 0, 3, 0, 3, 0, 99];
    assert_eq!(
        amp_chain(&int_code, &[1, 2], ComputerConfig::default()),
        Err(Error::AmplifierBlocked(0))
    );

    let int_code = [3, 0, 3, 0, 99];
    assert_eq!(
        amp_chain(&int_code, &[1, 2], ComputerConfig::default()),
        Err(Error::EmptyAmplifierOutput(0))
    );

    let int_code = [3, 0, 3, 0, 50];
    assert_eq!(
        amp_loop(&int_code, &[1, 2], ComputerConfig::default()),
        Err(Error::ExecutionError(
            intcode::Error::UnknownOpcode(50, 4),
            vec![1, 2]
        ))
    );
}

#[test]
fn loop_forwards_last_output_of_halted_amplifier() {
    // Phase 0 outputs signal + 1, takes one more signal and halts.
    // Other phases output signal * 10, then halt only if the next signal is 1.
    let int_code = [
        3, 50, 3, 51, 1005, 50, 16, 1001, 51, 1, 51, 4, 51, 3, 52, 99, 1002, 51, 10, 51, 4, 51, 3,
        52, 1008, 52, 1, 53, 1005, 53, 34, 3, 52, 99, 99,
    ];

    assert_eq!(amp_loop(&int_code, &[0, 1], ComputerConfig::default()), Ok(10));
}
