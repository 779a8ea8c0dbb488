use crate::engine::GameOfLife;
use crossterm::{cursor, execute, queue, terminal};
use std::io;

/// A read-only snapshot of the engine handed to a display for one generation
///
/// Borrowed, so a collaborator cannot retain it past the render call.
pub struct Frame<'a> {
    game: &'a GameOfLife,
}

impl<'a> Frame<'a> {
    pub fn new(game: &'a GameOfLife) -> Self {
        Self { game }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.game.grid().rows()
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.game.grid().cols()
    }
    #[inline]
    pub fn alive(&self, row: usize, col: usize) -> bool {
        self.game.grid().get(row, col)
    }
    #[inline]
    pub fn neighbors(&self, row: usize, col: usize) -> u8 {
        self.game.num_neighbors(row as i32, col as i32)
    }
    #[inline]
    pub fn generation(&self) -> u32 {
        self.game.generation()
    }
}

/// A display collaborator consuming one grid snapshot per generation
pub trait Render {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Formats a frame the way the console shows it: the neighbor count for
/// every live cell, a dot for every dead one, one line per row
pub fn format_grid(frame: &Frame<'_>) -> String {
    let mut out = String::new();
    for row in 0..frame.rows() {
        for col in 0..frame.cols() {
            if frame.alive(row, col) {
                out.push_str(&format!(" {} ", frame.neighbors(row, col)));
            } else {
                out.push_str(" . ");
            }
        }
        out.push('\n');
    }
    out
}

/// Console display: clears the screen and reprints the grid each generation
pub struct TextRender {
    stdout: io::Stdout,
}

impl TextRender {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, cursor::Hide)?;
        Ok(Self { stdout })
    }
}

impl Render for TextRender {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        io::Write::write_all(&mut self.stdout, format_grid(frame).as_bytes())?;
        let footer = format!("\nGeneration #{}\n", frame.generation());
        io::Write::write_all(&mut self.stdout, footer.as_bytes())?;
        io::Write::flush(&mut self.stdout)
    }
}

impl Drop for TextRender {
    fn drop(&mut self) {
        // if we could hide it, we should be able to show it
        execute!(io::stdout(), cursor::Show).expect("restore cursor");
    }
}
