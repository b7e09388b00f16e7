//! rVectorSurvey main entrypoint.

use rvectorsurvey::run;
use rvectorsurvey::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
