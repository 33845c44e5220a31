//! A single-line progress bar.
//!
//! Each draw rewrites the current line (`\r`); the final draw, when `current`
//! reaches `total`, ends the line with `\n` instead.

use std::io::{self, Write};

pub const DEFAULT_WIDTH: usize = 50;

const FILLED: char = '#';
const EMPTY: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBar {
    width: usize,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl ProgressBar {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Formats one frame: `label [###.....] 37%` plus the line terminator.
    ///
    /// A zero `total` counts as complete, and overshooting `total` is clamped.
    pub fn line(&self, label: &str, current: u64, total: u64) -> String {
        let ratio = if total == 0 {
            1.0
        } else {
            (current as f64 / total as f64).min(1.0)
        };
        let filled = ((self.width as f64 * ratio).round() as usize).min(self.width);
        let percent = (100.0 * ratio).round() as u64;
        let eol = if current >= total { '\n' } else { '\r' };

        let mut line = String::with_capacity(label.len() + self.width + 10);
        line.push_str(label);
        line.push_str(" [");
        line.extend(std::iter::repeat(FILLED).take(filled));
        line.extend(std::iter::repeat(EMPTY).take(self.width - filled));
        line.push_str(&format!("] {}%", percent));
        line.push(eol);
        line
    }

    /// Writes one frame and flushes so the terminal updates immediately.
    pub fn draw<W: Write + ?Sized>(
        &self,
        out: &mut W,
        label: &str,
        current: u64,
        total: u64,
    ) -> io::Result<()> {
        out.write_all(self.line(label, current, total).as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bar_at_start() {
        let bar = ProgressBar::new(10);
        assert_eq!(bar.line("Load", 0, 4), "Load [..........] 0%\r");
    }

    #[test]
    fn partial_bar_rounds() {
        let bar = ProgressBar::new(40);
        // 5/17 of 40 = 11.76 -> 12 cells, 29.4% -> 29%
        let line = bar.line("Testing:", 5, 17);
        assert_eq!(line.matches('#').count(), 12);
        assert_eq!(line.matches('.').count(), 28);
        assert!(line.ends_with("] 29%\r"));
    }

    #[test]
    fn complete_bar_ends_line() {
        let bar = ProgressBar::new(5);
        assert_eq!(bar.line("x", 3, 3), "x [#####] 100%\n");
    }

    #[test]
    fn zero_total_is_complete() {
        let bar = ProgressBar::new(4);
        assert_eq!(bar.line("x", 0, 0), "x [####] 100%\n");
    }

    #[test]
    fn overshoot_is_clamped() {
        let bar = ProgressBar::new(4);
        assert_eq!(bar.line("x", 9, 3), "x [####] 100%\n");
    }

    #[test]
    fn default_width() {
        assert_eq!(ProgressBar::default().width(), DEFAULT_WIDTH);
    }

    #[test]
    fn draw_writes_frame() {
        let mut buf: Vec<u8> = Vec::new();
        ProgressBar::new(2).draw(&mut buf, "go", 1, 2).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "go [#.] 50%\r");
    }
}
