use std::io;

use anyhow::Result;

use vaxtrace_cli::{Interpreter, Locale};
use vaxtrace_core::CalendarDate;

fn main() -> Result<()> {
    vaxtrace_observability::init();

    let locale = Locale::from_args(std::env::args().skip(1));
    let start = CalendarDate::new(1, 1, 2025)?;
    tracing::debug!(?locale, %start, "interpreter starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Interpreter::new(stdin, stdout, locale, start).run()?;
    Ok(())
}
