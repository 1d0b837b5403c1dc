use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// `None` means standard io; "-" is an explicit spelling of that.
fn file_path(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Input/output argument group.
#[derive(clap::Args, Debug)]
pub struct IoArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,

    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl IoArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> std::io::Result<Box<dyn BufRead>> {
        Ok(match file_path(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Open a writer for the output.
    pub fn open_writer(&self) -> std::io::Result<Box<dyn Write>> {
        Ok(match file_path(&self.output) {
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        })
    }
}
