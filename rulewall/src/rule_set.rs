mod test;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{error::RuleFormatError, Error, Result, Rule};

const COMMENT: char = '#';

/// Ordered, immutable list of compiled rules.
///
/// Built once, either through [RuleSetBuilder] or by parsing a rule file,
/// and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Box<[Rule]>,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Parses rule lines in order, numbering them from 1.
    ///
    /// Comments and blank lines are skipped. A line that fails to compile is
    /// reported with a warning naming `source` and skipped, it never aborts
    /// the parse.
    pub fn parse<I, S>(lines: I, source: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder();
        for (index, line) in lines.into_iter().enumerate() {
            builder.add_line(line.as_ref(), index + 1, source);
        }
        builder.build()
    }

    /// Same as [parse](Self::parse) but reading from `reader`.
    ///
    /// A line that is not valid UTF-8 is skipped like any other malformed
    /// rule. Fails only if `reader` itself fails.
    pub fn from_reader(reader: impl BufRead, source: &str) -> std::io::Result<Self> {
        let mut builder = Self::builder();
        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let line_no = index + 1;
            match std::str::from_utf8(&line) {
                Ok(text) => {
                    builder.add_line(text, line_no, source);
                }
                Err(error) => {
                    builder.reject(line_no, source, &String::from_utf8_lossy(&line), error.into())
                }
            }
        }
        Ok(builder.build())
    }

    /// Reads and parses the rule file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rule_file_error = |source| Error::RuleFile {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(rule_file_error)?;
        let rules = Self::from_reader(BufReader::new(file), &path.display().to_string())
            .map_err(rule_file_error)?;
        tracing::info!(rules = rules.len(), file = %path.display(), "rule file loaded");
        Ok(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Mutable side of a [RuleSet], frozen by [build](Self::build).
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    /// Appends a rule after every rule added so far.
    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Compiles one raw rule-file line.
    ///
    /// Returns whether a rule was appended. Comment-only and blank lines are
    /// not errors.
    pub fn add_line(&mut self, line: &str, line_no: usize, source: &str) -> bool {
        let text = strip_comment(line);
        if text.trim().is_empty() {
            return false;
        }

        match Rule::parse(text, line_no) {
            Ok(rule) => {
                tracing::debug!(line = line_no, %rule, "rule compiled");
                self.rules.push(rule);
                true
            }
            Err(error) => {
                self.reject(line_no, source, text, error);
                false
            }
        }
    }

    fn reject(&self, line_no: usize, source: &str, text: &str, error: RuleFormatError) {
        let error = Error::Rule {
            line: line_no,
            source: error,
        };
        tracing::warn!(
            line = line_no,
            file = source,
            text = text.trim(),
            %error,
            "ignoring malformed rule"
        );
    }

    pub fn build(self) -> RuleSet {
        RuleSet {
            rules: self.rules.into_boxed_slice(),
        }
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT).map_or(line, |(rule, _)| rule)
}
