use cycle_dispatch::{logging, run_dispatch};
use std::process;

fn main() {
    logging::init();
    process::exit(run_dispatch(std::env::args_os()));
}
