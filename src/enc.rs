use crate::grid::{Grid, GridError};
use std::fmt;

/// A codec between a pattern string and a rectangular [`Grid`]
pub trait GridCodec {
    fn encode(self, grid: &Grid) -> String;
    fn decode(self, value: &str) -> Result<Grid, DecodeError>;
}

/// Plaintext pattern format: `.` dead, `O` live, `!` starts a comment line
pub struct Plaintext;

impl GridCodec for Plaintext {
    fn encode(self, grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                out.push(if grid.get(row, col) { 'O' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    fn decode(self, value: &str) -> Result<Grid, DecodeError> {
        let mut rows = Vec::new();
        for (i, line) in value.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    'O' | '*' => row.push(true),
                    '.' => row.push(false),
                    _ => return Err(DecodeError::BadChar { line: i + 1, ch }),
                }
            }
            rows.push(row);
        }
        Ok(Grid::from_rows(&rows)?)
    }
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: usize, c: char) {
        let append = match run {
            0 => String::new(),
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

/// Run-length-encoded pattern format with an `x = W, y = H` header line
pub struct RunLengthEncoded {
    name: Option<String>,
    header: bool,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    fn encode_header(&self, grid: &Grid) -> String {
        let mut header = String::new();
        if !self.header {
            return header;
        }
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        header.push_str(&format!(
            "x = {}, y = {}, rule = 23/3",
            grid.cols(),
            grid.rows()
        ));
        header
    }

    fn encode_cells(&self, grid: &Grid) -> String {
        let mut seq = RunEncoder::new(70);
        let mut last_row: Option<usize> = None;
        for row in 0..grid.rows() {
            // trailing dead cells in a row are left implicit
            let Some(last_live) = (0..grid.cols()).rev().find(|&col| grid.get(row, col)) else {
                continue;
            };
            if let Some(prev) = last_row {
                seq.push_run(row - prev, '$');
            }
            last_row = Some(row);

            let mut run_len = 0;
            let mut run_alive = false;
            for col in 0..=last_live {
                let alive = grid.get(row, col);
                if run_len > 0 && alive == run_alive {
                    run_len += 1;
                    continue;
                }
                seq.push_run(run_len, if run_alive { 'o' } else { 'b' });
                run_len = 1;
                run_alive = alive;
            }
            seq.push_run(run_len, 'o');
        }
        seq.end()
    }
}
impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            header: true,
        }
    }
}

impl GridCodec for RunLengthEncoded {
    fn encode(self, grid: &Grid) -> String {
        format!("{}\n{}\n", self.encode_header(grid), self.encode_cells(grid))
    }

    fn decode(self, value: &str) -> Result<Grid, DecodeError> {
        let header_re = regex::Regex::new(r"x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)").unwrap();
        let token_re = regex::Regex::new(r"(\d*)([bo$!])").unwrap();

        // everything before the header line is comments or blank
        let mut lines = value.split('\n');
        let mut grid = loop {
            let Some(mut line) = lines.next() else {
                return Err(DecodeError::MissingHeader);
            };
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }
            if let Some(caps) = header_re.captures(line) {
                let cols = caps[1].parse().unwrap_or(0);
                let rows = caps[2].parse().unwrap_or(0);
                break Grid::new(rows, cols)?;
            }
            if !line.trim().is_empty() {
                return Err(DecodeError::MissingHeader);
            }
        };

        let mut row = 0usize;
        let mut col = 0usize;
        'lines_loop: for mut line in lines {
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }

            for (_, [run_str, state]) in token_re.captures_iter(line).map(|x| x.extract()) {
                let run = run_str.parse::<usize>().unwrap_or(1);
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        for _ in 0..run {
                            if row >= grid.rows() || col >= grid.cols() {
                                return Err(DecodeError::OutOfBounds { row, col });
                            }
                            grid.set(row, col, true);
                            col += 1;
                        }
                    }
                    "b" => col += run,
                    "$" => {
                        col = 0;
                        row += run;
                    }
                    _ => unreachable!(),
                }
            }
        }

        Ok(grid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character that belongs to neither cell state
    BadChar { line: usize, ch: char },
    /// RLE input with no `x = W, y = H` header line
    MissingHeader,
    /// RLE run writing a live cell outside the declared dimensions
    OutOfBounds { row: usize, col: usize },
    Grid(GridError),
}

impl From<GridError> for DecodeError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadChar { line, ch } => {
                write!(f, "unexpected character {:?} on line {}", ch, line)
            }
            Self::MissingHeader => write!(f, "missing 'x = W, y = H' header line"),
            Self::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the declared dimensions", row, col)
            }
            Self::Grid(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for DecodeError {}
