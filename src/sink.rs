//! Where generated lines go: a file or stdout.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn from_arg(out: Option<&Path>) -> Self {
        match out {
            Some(path) => Sink::File(path.to_path_buf()),
            None => Sink::Stdout,
        }
    }

    fn display_path(&self) -> PathBuf {
        match self {
            Sink::Stdout => PathBuf::from("<stdout>"),
            Sink::File(path) => path.clone(),
        }
    }

    /// Write each line followed by `\n`.
    pub fn write_lines<I>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let result = match self {
            Sink::Stdout => {
                let stdout = io::stdout();
                write_all(&mut stdout.lock(), lines)
            }
            Sink::File(path) => create_file(path).and_then(|file| {
                let mut w = BufWriter::new(file);
                write_all(&mut w, lines)
            }),
        };
        result.map_err(|source| Error::SinkIo { path: self.display_path(), source })
    }
}

fn create_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}

fn write_all<W, I>(w: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for line in lines {
        w.write_all(line.as_ref().as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()
}
