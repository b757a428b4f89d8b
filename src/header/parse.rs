//! # Header Reader
//!
//! Reads the pixel array back out of a generated header. Used by the
//! `verify` command to check that the declared array length matches the
//! number of values written.

use crate::error::{ConvertError, Result};

/// The pixel array found in a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArray {
    /// Array symbol, e.g. `SM_PIC`
    pub name: String,
    /// Length written between the brackets
    pub declared_len: usize,
    /// Values in the order they appear
    pub values: Vec<u16>,
}

impl ParsedArray {
    pub fn is_consistent(&self) -> bool {
        self.declared_len == self.values.len()
    }
}

/// Parse the first `PROGMEM` array in `text`.
pub fn parse_array(text: &str) -> Result<ParsedArray> {
    let mut lines = text.lines();

    let decl = lines
        .by_ref()
        .find(|l| l.contains("PROGMEM") && l.trim_end().ends_with('{'))
        .ok_or_else(|| ConvertError::Parse("no PROGMEM array declaration".to_string()))?;

    let open = decl
        .find('[')
        .ok_or_else(|| ConvertError::Parse(format!("missing '[' in: {}", decl)))?;
    let close = decl[open..]
        .find(']')
        .map(|i| open + i)
        .ok_or_else(|| ConvertError::Parse(format!("missing ']' in: {}", decl)))?;

    let name = decl[..open]
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_string();
    let declared_len = decl[open + 1..close]
        .trim()
        .parse::<usize>()
        .map_err(|e| ConvertError::Parse(format!("bad array length in '{}': {}", decl, e)))?;

    let mut values = Vec::with_capacity(declared_len);
    let mut closed = false;
    for line in lines {
        if line.trim_start().starts_with("};") {
            closed = true;
            break;
        }
        for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let hex = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .ok_or_else(|| ConvertError::Parse(format!("not a hex value: {}", token)))?;
            let value = u16::from_str_radix(hex, 16)
                .map_err(|e| ConvertError::Parse(format!("bad value '{}': {}", token, e)))?;
            values.push(value);
        }
    }

    if !closed {
        return Err(ConvertError::Parse(format!("array {} is not closed", name)));
    }

    Ok(ParsedArray {
        name,
        declared_len,
        values,
    })
}
