use std::io::{self, Stderr, Stdout, Write};

pub struct OtpWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl OtpWriter {
    pub fn new() -> Self {
        OtpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

pub trait OutErr {
    fn write_err(&mut self, s: &str) -> io::Result<()>;
    fn write(&mut self, s: &str) -> io::Result<()>;
}

impl OutErr for OtpWriter {
    fn write_err(&mut self, s: &str) -> io::Result<()> {
        let mut err = self.err.lock();
        err.write_all(s.as_bytes())?;
        err.flush()
    }

    // the code is the only thing ever written here; flush so a closed pipe
    // is reported before the process exits successfully
    fn write(&mut self, s: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        out.write_all(s.as_bytes())?;
        out.flush()
    }
}
