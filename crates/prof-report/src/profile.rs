use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub function: String,
    pub runtime: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionSamples {
    pub function: String,
    pub runtimes: Vec<f64>,
}

pub fn parse_line(line: &str, number: usize) -> ReportResult<Sample> {
    let malformed = || ReportError::MalformedLine {
        line: number,
        content: line.to_string(),
    };
    let mut fields = line.split(':');
    let (Some(function), Some(value), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };
    let runtime: f64 = value.trim().parse().map_err(|_| malformed())?;
    Ok(Sample {
        function: function.to_string(),
        runtime,
    })
}

pub fn read_samples(path: &Path) -> ReportResult<Vec<Sample>> {
    let raw = fs::read_to_string(path)?;
    let mut samples = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        samples.push(parse_line(line, idx + 1)?);
    }
    Ok(samples)
}

// Groups keep first-appearance order; runtimes keep file order.
pub fn group_samples(samples: Vec<Sample>) -> Vec<FunctionSamples> {
    let mut groups: Vec<FunctionSamples> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for sample in samples {
        match index.get(&sample.function) {
            Some(&slot) => groups[slot].runtimes.push(sample.runtime),
            None => {
                index.insert(sample.function.clone(), groups.len());
                groups.push(FunctionSamples {
                    function: sample.function,
                    runtimes: vec![sample.runtime],
                });
            }
        }
    }
    groups
}
