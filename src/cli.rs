use std::path::PathBuf;
use std::process;

use chrono::{Local, NaiveDate};
use getopts::Options;

use calendar_engine::ViewMode;

pub struct Args {
    pub events_file: PathBuf,
    pub date: NaiveDate,
    pub view: Option<ViewMode>,
    pub search: String,
    pub config: Option<PathBuf>,
    pub scroll_offset: f32,
    pub viewport_height: f32,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt("d", "date", "Anchor date [Default: today]", "YYYY-MM-DD");
    opts.optopt(
        "v",
        "view",
        "View to print: month, week or agenda [Default: from settings]",
        "VIEW",
    );
    opts.optopt("s", "search", "Only show events whose title contains TEXT", "TEXT");
    opts.optopt("c", "config", "Settings file [Default: platform config dir]", "PATH");
    opts.optopt(
        "o",
        "scroll-offset",
        "Agenda scroll offset in pixels [Default: 0]",
        "PIXELS",
    );
    opts.optopt(
        "H",
        "viewport-height",
        "Agenda viewport height in pixels [Default: 720]",
        "PIXELS",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();
    let usage = format!("{} [options] EVENTS.json", env!("CARGO_PKG_NAME"));

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&usage));
        process::exit(0);
    }

    let Some(events_file) = matches.free.first().map(PathBuf::from) else {
        eprintln!("Missing events file\n{}", opts.usage(&usage));
        process::exit(1);
    };

    let date = match matches.opt_get_default("date", Local::now().date_naive()) {
        Ok(date) => date,
        Err(err) => {
            eprintln!("Provided value for option 'date' is invalid: {err}");
            process::exit(1);
        }
    };

    let view = match matches.opt_get::<ViewMode>("view") {
        Ok(view) => view,
        Err(err) => {
            eprintln!("Provided value for option 'view' is invalid: {err}");
            process::exit(1);
        }
    };

    let scroll_offset = match matches.opt_get_default("scroll-offset", 0.0) {
        Ok(offset) => offset,
        Err(err) => {
            eprintln!("Provided value for option 'scroll-offset' is invalid: {err}");
            process::exit(1);
        }
    };

    let viewport_height = match matches.opt_get_default("viewport-height", 720.0) {
        Ok(height) => height,
        Err(err) => {
            eprintln!("Provided value for option 'viewport-height' is invalid: {err}");
            process::exit(1);
        }
    };

    Args {
        events_file,
        date,
        view,
        search: matches.opt_str("search").unwrap_or_default(),
        config: matches.opt_str("config").map(PathBuf::from),
        scroll_offset,
        viewport_height,
    }
}
