//! Plain-text line sinks.

/// Something that accepts lines of display text.
pub trait Printer {
    fn print(&mut self, line: &str);
}

impl<P: Printer + ?Sized> Printer for &mut P {
    fn print(&mut self, line: &str) {
        (**self).print(line);
    }
}

/// Writes each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferPrinter {
    lines: Vec<String>,
}

impl BufferPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Printer for BufferPrinter {
    fn print(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
