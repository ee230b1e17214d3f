use strum::{FromRepr, IntoStaticStr};

/// Result of the fallible console operations.
pub type PrintResult<T> = Result<T, PrintError>;

/// Errors of the console registry. Codes follow `errno.h`.
#[derive(FromRepr, IntoStaticStr, Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum PrintError {
    /// Device or resource busy: a console is already installed
    ConsoleBusy = 16,
    /// No such device: nothing has been installed yet
    NoConsole = 19,
}

impl PrintError {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl core::fmt::Display for PrintError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}
