//! chronosync main entrypoint.

use chronosync::run;
use chronosync::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(e.exit_code());
    }
}
