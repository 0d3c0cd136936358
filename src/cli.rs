use std::env;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeChoice {
    Dark,
    None,
}

#[derive(Debug)]
pub struct Args {
    pub language: Option<String>,
    pub theme: ThemeChoice,
    pub gutter: bool,
    pub header: bool,
    pub files: Vec<String>,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut language: Option<String> = None;
    let mut theme = ThemeChoice::Dark;
    let mut gutter = true;
    let mut header = true;
    let mut files: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            i += 1;
            // Everything after -- is a file operand
            while i < args.len() {
                files.push(args[i].clone());
                i += 1;
            }
            break;
        }

        if arg == "-l" {
            i += 1;
            if i >= args.len() {
                eprintln!("glint: -l requires an argument");
                process::exit(1);
            }
            language = Some(args[i].clone());
        } else if let Some(tag) = arg.strip_prefix("-l") {
            language = Some(tag.to_string());
        } else if arg == "-t" {
            i += 1;
            if i >= args.len() {
                eprintln!("glint: -t requires an argument (dark, none)");
                process::exit(1);
            }
            theme = parse_theme(&args[i]);
        } else if arg.starts_with("-t") && arg.len() > 2 {
            theme = parse_theme(&arg[2..]);
        } else if arg == "--plain" {
            theme = ThemeChoice::None;
        } else if arg == "--no-gutter" {
            gutter = false;
        } else if arg == "--no-header" {
            header = false;
        } else if arg == "-h" || arg == "--help" {
            print_usage();
            process::exit(0);
        } else if arg == "--version" {
            println!("glint {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        } else if arg.starts_with('-') && arg.len() > 1 {
            eprintln!("glint: unknown option: {}", arg);
            eprintln!("Try 'glint --help' for usage.");
            process::exit(1);
        } else {
            files.push(arg.clone());
        }

        i += 1;
    }

    Args { language, theme, gutter, header, files }
}

fn parse_theme(s: &str) -> ThemeChoice {
    match s {
        "dark" => ThemeChoice::Dark,
        "none" => ThemeChoice::None,
        other => {
            eprintln!("glint: unknown theme: {}", other);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "glint {} — syntax highlighting for code snippets",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!("Usage: glint [options] [file ...]");
    eprintln!("       glint [options]                    # reads stdin");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l lang          Language tag (py, go, ts, ...); overrides detection");
    eprintln!("  -t theme         Color theme: dark (default), none");
    eprintln!("  --plain          Same as -t none");
    eprintln!("  --no-gutter      Hide line numbers");
    eprintln!("  --no-header      Hide the filename line above each file");
    eprintln!("  -h, --help       Show this help");
    eprintln!();
    eprintln!("  Language auto-detected from the file extension when -l is absent.");
    eprintln!("  Unrecognized tags fall back to the JS/TS rule set.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  glint src/app.py                  # highlight a file");
    eprintln!("  glint -l go snippet.txt           # force the Go rules");
    eprintln!("  cat patch.diff | glint -l ts      # highlight stdin");
    eprintln!("  glint --plain --no-gutter f.go    # tokens only, no color");
}
