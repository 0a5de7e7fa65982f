use crate::{
    parser::parse_line,
    processor::{format_selection, process_line},
    reader::{FileReader, Reader},
    PackError,
};
use packer_structs::{
    config::{BatchPolicy, PackerConfig},
    core::Selection,
};
use packer_utils::jsonify;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PackedLine {
    pub line: usize,
    #[serde(flatten)]
    pub selection: Selection,
}

#[derive(Debug)]
pub struct RejectedLine {
    pub line: usize,
    pub error: PackError,
}

/// Results of one batch, in input order.
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub packed: Vec<PackedLine>,
    pub rejected: Vec<RejectedLine>,
}

impl BatchOutput {
    pub fn render(&self, empty_marker: &str) -> String {
        self.packed
            .iter()
            .map(|packed| format_selection(&packed.selection, empty_marker))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One json object per packed line.
    pub fn render_json(&self) -> serde_json::Result<String> {
        Ok(self
            .packed
            .iter()
            .map(jsonify)
            .collect::<serde_json::Result<Vec<_>>>()?
            .join("\n"))
    }
}

pub struct Packer<R: Reader = FileReader> {
    reader: R,
    config: PackerConfig,
}

impl<R: Reader> Packer<R> {
    pub fn new(reader: R, config: PackerConfig) -> Result<Self, PackError> {
        if config.min_weight_limit < 0 || config.min_weight_limit > config.max_weight_limit {
            return Err(PackError::InvalidConfig {
                reason: format!(
                    "weight limit range [{}, {}] is invalid",
                    config.min_weight_limit, config.max_weight_limit
                ),
            });
        }
        config.weight_scale().map_err(|e| PackError::InvalidConfig {
            reason: e.to_string(),
        })?;
        Ok(Self { reader, config })
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Packs every line of `source` and renders the text output.
    pub fn pack(&self, source: &str) -> Result<String, PackError> {
        let output = self.pack_source(source)?;
        Ok(output.render(&self.config.empty_marker))
    }

    pub fn pack_source(&self, source: &str) -> Result<BatchOutput, PackError> {
        let lines = self.reader.read_lines(source)?;
        self.pack_lines(lines)
    }

    /// Blank lines are skipped but still count towards line numbers.
    /// Read failures abort regardless of [`BatchPolicy`].
    pub fn pack_lines<I>(&self, lines: I) -> Result<BatchOutput, PackError>
    where
        I: IntoIterator<Item = Result<String, PackError>>,
    {
        let mut output = BatchOutput::default();
        for (i, line) in lines.into_iter().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|e| e.at_line(line_no))?;
            if line.trim().is_empty() {
                continue;
            }
            match self.pack_line(&line) {
                Ok(selection) => {
                    debug!(
                        line = line_no,
                        indices = ?selection.indices,
                        total_value = selection.total_value,
                        "packed line"
                    );
                    output.packed.push(PackedLine {
                        line: line_no,
                        selection,
                    });
                }
                Err(e) => match self.config.batch_policy {
                    BatchPolicy::Abort => return Err(e.at_line(line_no)),
                    BatchPolicy::Isolate => {
                        warn!(line = line_no, error = %e, "skipping rejected line");
                        output.rejected.push(RejectedLine {
                            line: line_no,
                            error: e,
                        });
                    }
                },
            }
        }
        info!(
            packed = output.packed.len(),
            rejected = output.rejected.len(),
            "batch finished"
        );
        Ok(output)
    }

    pub fn pack_line(&self, line: &str) -> Result<Selection, PackError> {
        let task = parse_line(line, self.config.weight_precision)?;
        process_line(&task, &self.config)
    }
}
