//! Generates the glyph metrics and kerning tables of the mtex fake backend.

use mtex::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
