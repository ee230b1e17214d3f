use std::sync::Mutex;

use driver::CharDevice;
use log::LevelFilter;

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

fn drain() -> String {
    String::from_utf8(std::mem::take(&mut *DEVICE.0.lock().unwrap())).unwrap()
}

#[test]
fn test_records_reach_the_console() {
    logger::init();
    log::set_max_level(LevelFilter::Info);

    // dropped: nothing installed yet
    log::error!("early");
    logger::lprintln!("early too");

    printf::install(&DEVICE).unwrap();
    assert_eq!(drain(), "\u{1B}[36m[ INFO] console: installed\u{1B}[0m\n");

    log::warn!("hart {} online", 1);
    log::debug!("filtered");
    assert_eq!(drain(), "\u{1B}[93m[ WARN] hart 1 online\u{1B}[0m\n");

    logger::lprint!("{}+{}", 1, 2);
    logger::lprintln!("={}", 3);
    printf::printf!("%s\n", "ok");
    assert_eq!(drain(), "1+2=3\nok\n");
}
