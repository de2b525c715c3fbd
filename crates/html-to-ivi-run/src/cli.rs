use clap::CommandFactory;
use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate};
use html_to_ivi::{DEFAULT_COMPONENT_NAME, FormatterConfig, TransformOptions};
use miette::IntoDiagnostic;
use miette::miette;
use std::io::IsTerminal;
use std::io::{self, BufWriter, Read, Write};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug, Default)]
#[command(name = "html-to-ivi")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "# Examples:\n\n\
    ## To convert an HTML file:\n\
    html-to-ivi index.html\n\n\
    ## To read HTML from stdin and name the component:\n\
    echo '<div class=\"app\"></div>' | html-to-ivi --component-name App\n\n\
    ## To print the generated code without formatting:\n\
    html-to-ivi --raw index.html")]
#[command(
    about = "html-to-ivi converts HTML into ivi component functions built with builder chains.",
    long_about = None
)]
pub struct Cli {
    #[clap(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    output: OutputArgs,

    #[clap(subcommand)]
    commands: Option<Commands>,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// HTML file to convert; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::Args)]
struct InputArgs {
    /// HTML file to convert
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "file")]
    input_file: Option<PathBuf>,

    /// Name of the generated component function
    #[arg(long, default_value = DEFAULT_COMPONENT_NAME)]
    component_name: String,

    /// Keep text children that consist only of whitespace
    #[arg(long, default_value_t = false)]
    no_trim: bool,
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            input_file: None,
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            no_trim: false,
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
struct OutputArgs {
    /// Print the generated code without formatting
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Number of spaces for indentation
    #[arg(long, default_value_t = 2)]
    indent_width: usize,

    /// Line width the formatter tries to stay within
    #[arg(long, default_value_t = 80)]
    print_width: usize,

    /// Output to the specified file
    #[clap(short = 'o', long = "output", value_name = "FILE")]
    output_file: Option<PathBuf>,
}

impl Default for OutputArgs {
    fn default() -> Self {
        let config = FormatterConfig::default();

        Self {
            raw: false,
            indent_width: config.indent_width,
            print_width: config.print_width,
            output_file: None,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate shell completion scripts for supported shells
    Completion {
        #[arg(short, long, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(&self) -> miette::Result<()> {
        match &self.commands {
            Some(Commands::Completion { shell }) => {
                generate(*shell, &mut Cli::command(), "html-to-ivi", &mut io::stdout());
                Ok(())
            }
            None => {
                let input = self.read_contents()?;
                let code = self.convert(&input)?;
                self.print(&code)
            }
        }
    }

    fn convert(&self, input: &str) -> miette::Result<String> {
        let options = TransformOptions {
            component_name: self.input.component_name.clone(),
            trim: !self.input.no_trim,
        };

        let code = if self.output.raw {
            html_to_ivi::convert_unformatted(input, &options)?
        } else {
            html_to_ivi::convert_with_formatter(
                input,
                &options,
                FormatterConfig {
                    indent_width: self.output.indent_width,
                    print_width: self.output.print_width,
                },
            )?
        };

        if code.is_empty() {
            log::warn!("No element found in the input");
        }

        Ok(code)
    }

    fn read_contents(&self) -> miette::Result<String> {
        match self.file.as_ref().or(self.input.input_file.as_ref()) {
            Some(file) => {
                if !file.exists() {
                    return Err(miette!("File not found: {}", file.display()));
                }

                log::debug!("reading {}", file.display());
                fs::read_to_string(file).into_diagnostic()
            }
            None => {
                if io::stdin().is_terminal() {
                    return Ok(String::new());
                }

                let mut input = String::new();
                io::stdin().read_to_string(&mut input).into_diagnostic()?;
                Ok(input)
            }
        }
    }

    fn print(&self, code: &str) -> miette::Result<()> {
        let stdout = io::stdout();
        let mut handle: Box<dyn Write> = if let Some(output_file) = &self.output.output_file {
            let file = fs::File::create(output_file).into_diagnostic()?;
            Box::new(BufWriter::new(file))
        } else {
            Box::new(BufWriter::new(stdout.lock()))
        };

        handle.write_all(code.as_bytes()).into_diagnostic()?;
        if !code.is_empty() && !code.ends_with('\n') {
            handle.write_all(b"\n").into_diagnostic()?;
        }

        handle.flush().into_diagnostic()
    }
}
