//! File parsing internals

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

use super::{parse_line, split_lines, Line, LoadError, Setting};

/// The result of parsing an sshd-style configuration file.
///
/// Keys are case-sensitive. Where a key appears more than once, the last occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SshdConfig {
    /// If present, this is the file we read
    source: Option<PathBuf>,
    data: BTreeMap<String, Setting>,
}

impl SshdConfig {
    /// Reads and parses the file at `path`.
    ///
    /// The file handle is released before this function returns, whether or not parsing succeeded.
    pub fn load<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        Parser::for_path(path)?.parse()
    }

    /// Looks up the value of a directive
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.value.as_str())
    }

    /// Looks up a directive, with its provenance
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&Setting> {
        self.data.get(key)
    }

    /// The file this configuration was read from, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of distinct directives
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if no directives were read
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over directives and their values, in key order
    pub fn directives(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.value.as_str()))
    }
}

///////////////////////////////////////////////////////////////////////////////////////

/// The business end of reading a config file.
///
/// # Note
/// You can only use this struct once. If for some reason you want to re-parse a file,
/// you must create a fresh `Parser` to do so.
pub(super) struct Parser<R>
where
    R: Read,
{
    reader: BufReader<R>,
    /// If present, this is the file we are reading
    path: Option<PathBuf>,
}

impl Parser<File> {
    pub(super) fn for_path<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
        Ok(Self::for_reader(BufReader::new(file), Some(path.to_path_buf())))
    }
}

#[cfg(test)]
impl<'a> Parser<&'a [u8]> {
    pub(super) fn for_str(s: &'a str) -> Self {
        Self::for_reader(BufReader::new(s.as_bytes()), None)
    }
}

impl<R: Read> Parser<R> {
    fn for_reader(reader: BufReader<R>, path: Option<PathBuf>) -> Self {
        Self { reader, path }
    }

    /// Reads the whole source.
    /// This consumes the `Parser`, closing the underlying reader.
    ///
    /// Lines may end in `\n`, `\r\n` or a bare `\r`.
    pub(super) fn parse(mut self) -> Result<SshdConfig, LoadError> {
        let mut text = String::new();
        let _ = self.reader.read_to_string(&mut text).map_err(|e| {
            let label = self.path.clone().unwrap_or_else(|| "<string>".into());
            LoadError::from_io(label, e)
        })?;
        drop(self.reader);

        let mut output = SshdConfig {
            source: self.path,
            data: BTreeMap::new(),
        };

        for (index, line) in split_lines(&text).enumerate() {
            match parse_line(line, index + 1) {
                Line::Empty => (),
                Line::Incomplete {
                    line_number,
                    keyword,
                } => {
                    debug!("ignoring {keyword} with no value at line {line_number}");
                }
                Line::Directive {
                    line_number,
                    keyword,
                    value,
                } => {
                    trace!("line {line_number}: {keyword} = {value}");
                    let previous = output
                        .data
                        .insert(keyword.clone(), Setting { value, line_number });
                    if let Some(prev) = previous {
                        debug!(
                            "{keyword} at line {line_number} overrides line {}",
                            prev.line_number
                        );
                    }
                }
            }
        }
        Ok(output)
    }
}

///////////////////////////////////////////////////////////////////////////////////////
