pub mod com;
mod inst;
mod mem;

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::Error;

pub use inst::{Opcode, ParamRole, ParameterMode};

pub fn parse_int_code(text: &str) -> Result<Vec<i64>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyIntCode);
    }

    text.split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<i64>()
                .map_err(|_| Error::MalformedIntCode(s.to_string()))
        })
        .collect()
}

pub fn read_int_code<P>(path: P) -> Result<Vec<i64>>
where
    P: AsRef<Path>,
{
    let text = fs::read_to_string(&path).with_context(|| {
        format!(
            "Failed to read int code from file({}).",
            path.as_ref().display()
        )
    })?;

    parse_int_code(&text).with_context(|| {
        format!(
            "Failed to parse int code in file({}).",
            path.as_ref().display()
        )
    })
}
