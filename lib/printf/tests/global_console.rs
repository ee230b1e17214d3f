//! The process-wide console registry. Kept in its own test binary since the
//! registry can only be filled once.

use std::sync::Mutex;

use driver::CharDevice;
use printf::{Arg, ArgList, PrintError};

struct Recorder(Mutex<Vec<u8>>);

impl CharDevice for Recorder {
    fn putchar(&self, c: u8) {
        self.0.lock().unwrap().push(c);
    }

    fn getchar(&self) -> u8 {
        0
    }
}

static DEVICE: Recorder = Recorder(Mutex::new(Vec::new()));

#[test]
fn test_console_lifecycle() {
    assert_eq!(printf::console().err(), Some(PrintError::NoConsole));
    assert_eq!(
        printf::try_vprintf("%d", &mut ArgList::new(&[Arg::from(1)])),
        Err(PrintError::NoConsole)
    );
    // still counts without a device
    assert_eq!(printf::printf!("%5s", "ab"), 5);

    printf::install(&DEVICE).unwrap();
    assert_eq!(printf::install(&DEVICE), Err(PrintError::ConsoleBusy));

    let n = printf::printf!("Hello, kernel World!\r\n");
    assert_eq!(n, 22);
    let args = [Arg::from("at"), Arg::from(0x1000_0000u64)];
    let n = printf::vprintf("%s %lx", &mut ArgList::new(&args));
    assert_eq!(n, 11);
    assert_eq!(printf::try_vprintf("%c", &mut ArgList::new(&[Arg::from('.')])), Ok(1));

    let out = DEVICE.0.lock().unwrap();
    assert_eq!(&out[..], b"Hello, kernel World!\r\nat 10000000.");
}
