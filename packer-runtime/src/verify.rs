use crate::{
    parser::parse_line,
    processor::{checked_capacity, checked_solve},
    reader::{Lines, Reader},
    Packer, PackError,
};
use packer_solver::verify_selection;

#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub line: usize,
    pub reason: String,
}

impl<R: Reader> Packer<R> {
    /// Checks each line of `expected` is a feasible and optimal packing of the matching `input` line.
    ///
    /// Bad input lines are errors, not mismatches.
    pub fn verify(&self, input: &str, expected: &str) -> Result<Vec<Mismatch>, PackError> {
        let inputs = non_blank(self.reader().read_lines(input)?)?;
        let outputs = non_blank(self.reader().read_lines(expected)?)?;

        let mut mismatches = Vec::new();
        for (i, (line_no, line)) in inputs.iter().enumerate() {
            let Some((_, output)) = outputs.get(i) else {
                mismatches.push(Mismatch {
                    line: *line_no,
                    reason: "missing expected output".to_string(),
                });
                continue;
            };
            if let Some(reason) = self
                .verify_line(line, output)
                .map_err(|e| e.at_line(*line_no))?
            {
                mismatches.push(Mismatch {
                    line: *line_no,
                    reason,
                });
            }
        }
        for (line_no, _) in outputs.iter().skip(inputs.len()) {
            mismatches.push(Mismatch {
                line: *line_no,
                reason: "expected output has no input line".to_string(),
            });
        }
        Ok(mismatches)
    }

    fn verify_line(&self, line: &str, output: &str) -> Result<Option<String>, PackError> {
        let config = self.config();
        let task = parse_line(line, config.weight_precision)?;
        let capacity = checked_capacity(&task, config)?;
        let optimal = checked_solve(capacity, &task.items, config)?;

        let indices = match parse_indices(output, &config.empty_marker) {
            Ok(indices) => indices,
            Err(reason) => return Ok(Some(reason)),
        };
        Ok(match verify_selection(capacity, &task.items, &indices) {
            Err(e) => Some(e.to_string()),
            Ok(selection)
                if selection.total_value + 1e-9 * optimal.total_value.max(1.0)
                    < optimal.total_value =>
            {
                Some(format!(
                    "Total value ({}) is less than optimal ({})",
                    selection.total_value, optimal.total_value
                ))
            }
            Ok(_) => None,
        })
    }
}

fn non_blank(lines: Lines) -> Result<Vec<(usize, String)>, PackError> {
    let mut kept = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line.map_err(|e| e.at_line(i + 1))?;
        if !line.trim().is_empty() {
            kept.push((i + 1, line));
        }
    }
    Ok(kept)
}

fn parse_indices(output: &str, empty_marker: &str) -> Result<Vec<usize>, String> {
    let output = output.trim();
    if output == empty_marker {
        return Ok(Vec::new());
    }
    output
        .split(',')
        .map(|index| {
            index
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid index list ({})", output))
        })
        .collect()
}
