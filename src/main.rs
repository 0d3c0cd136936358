use std::process;

use glint::cli::{self, ThemeChoice};
use glint::format::{self, AnsiTheme};
use glint::input::{self, Source};
use glint::rules;

fn main() {
    let args = cli::parse_args();

    let theme = match args.theme {
        ThemeChoice::Dark => AnsiTheme::dark(),
        ThemeChoice::None => AnsiTheme::none(),
    };

    let sources = input::sources(&args.files);
    for (i, source) in sources.iter().enumerate() {
        let mut code = match source.read() {
            Ok(code) => code,
            Err(e) => {
                eprintln!("glint: {}", e);
                process::exit(1);
            }
        };

        // Drop a single trailing newline so the gutter doesn't number a
        // phantom empty final line.
        if code.ends_with('\n') {
            code.pop();
            if code.ends_with('\r') {
                code.pop();
            }
        }

        // Explicit -l wins; otherwise detect from the file extension, and
        // fall back to the default rule set with no tag to show.
        let tag = match args.language {
            Some(ref lang) => lang.as_str(),
            None => rules::tag_from_path(source.label()).unwrap_or(""),
        };

        if i > 0 {
            println!();
        }
        if args.header && matches!(source, Source::File(_)) {
            println!("{}", format::render_header(source.label(), tag, &theme));
        }
        println!(
            "{}",
            format::highlight_with_theme(&code, tag, &theme, args.gutter)
        );
    }
}
