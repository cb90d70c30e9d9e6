use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };
    let completions_dir = out_dir.join("completions");

    if let Err(err) = fs::create_dir_all(&completions_dir) {
        println!("cargo:warning=Could not create completions directory: {}", err);
        return;
    }

    let mut cmd = clap::Command::new("swiftread")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Swiftread Contributors")
        .about("Clean extracted web page text for speed reading")
        .arg(clap::arg!(<INPUT> "Text file with extracted page content, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--max_words <NUM> "Maximum words per chunk sent to the model").value_name("NUM"))
        .arg(clap::arg!(--concurrency <NUM> "Maximum number of concurrent model calls").value_name("NUM"))
        .arg(clap::arg!(--model <MODEL> "Chat model used for cleanup"))
        .arg(clap::arg!(--timeout <SECS> "Model request timeout in seconds"))
        .arg(clap::arg!(--passthrough "Skip the model and only re-chunk the text"))
        .arg(clap::arg!(--line_width <COLS> "Wrap text output at this width (0 = no wrapping)").default_value("0"))
        .arg(clap::arg!(--header "Prefix text output with a statistics header"))
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    let shells = [
        clap_complete::Shell::Bash,
        clap_complete::Shell::Zsh,
        clap_complete::Shell::Fish,
        clap_complete::Shell::PowerShell,
    ];
    for shell in shells {
        if let Err(err) = clap_complete::generate_to(shell, &mut cmd, "swiftread", &completions_dir) {
            println!("cargo:warning=Could not generate {} completions: {}", shell, err);
        }
    }
}
