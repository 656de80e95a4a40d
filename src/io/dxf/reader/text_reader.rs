//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufReader, Read, Seek, SeekFrom};

/// DXF ASCII text file reader
pub struct DxfTextReader<R: Read + Seek> {
    reader: BufReader<R>,
    line_number: usize,
    peeked_pair: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read + Seek> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: BufReader<R>) -> Result<Self> {
        Ok(Self {
            reader,
            line_number: 0,
            peeked_pair: None,
            encoding: None,
        })
    }
    
    /// Read a single line from the stream, handling non-UTF8 bytes gracefully.
    /// Uses the configured encoding for fallback, or Latin-1 if none set.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        
        // Read bytes until newline
        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    // EOF
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }
        
        self.line_number += 1;
        
        // Try UTF-8 first, then use configured encoding or Latin-1 fallback
        let line = match String::from_utf8(bytes.clone()) {
            Ok(s) => s,
            Err(_) => {
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(&bytes);
                    decoded.into_owned()
                } else {
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };
        
        // Trim whitespace and newlines (including \r)
        let trimmed = line.trim().to_string();
        Ok(Some(trimmed))
    }
    
    /// Read a code/value pair from the stream
    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        // Read code line
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        
        // Parse code
        let code = code_line.trim().parse::<i32>().map_err(|_| DxfError::BadPair {
            line: self.line_number,
            detail: format!("non-numeric group code '{}'", code_line),
        })?;

        // Read value line
        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::UnexpectedEof {
                    line: self.line_number,
                    context: format!("value line for code {}", code),
                })
            }
        };
        
        // Process special character sequences in strings
        let value = self.process_string_value(&value_line);
        
        Ok(Some(DxfCodePair::new(code, value)))
    }
    
    /// Process special character sequences in DXF strings
    fn process_string_value(&self, value: &str) -> String {
        value
            .replace("^J", "\n")
            .replace("^M", "\r")
            .replace("^I", "\t")
            .replace("^ ", "^")
    }
}

impl<R: Read + Seek> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        // If we have a peeked pair, return it
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }
        
        self.read_pair_internal()
    }
    
    fn peek_code(&mut self) -> Result<Option<i32>> {
        // If we already have a peeked pair, return its code
        if let Some(ref pair) = self.peeked_pair {
            return Ok(Some(pair.code));
        }
        
        // Read the next pair and store it
        if let Some(pair) = self.read_pair_internal()? {
            let code = pair.code;
            self.peeked_pair = Some(pair);
            Ok(Some(code))
        } else {
            Ok(None)
        }
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.peeked_pair = Some(pair);
    }
    
    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line_number = 0;
        self.peeked_pair = None;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
