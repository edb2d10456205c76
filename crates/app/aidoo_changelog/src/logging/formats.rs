use flexi_logger::DeferredNow;
use log::{Level, Record};

/// `Error: …` / `Warning: …` for problems, the bare message otherwise.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    match record.level() {
        Level::Error => write!(w, "Error: {}", record.args()),
        Level::Warn => write!(w, "Warning: {}", record.args()),
        Level::Info => write!(w, "{}", record.args()),
        Level::Debug | Level::Trace => {
            write!(w, "[{}] {}: {}", record.level(), record.target(), record.args())
        }
    }
}
