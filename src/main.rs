//! Erfassungsbogen main entrypoint.

use erfassungsbogen::run;

fn main() {
    if let Err(e) = run() {
        erfassungsbogen::ui::messages::error(&e);
        std::process::exit(1);
    }
}
