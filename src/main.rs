use clap::{Parser, Subcommand};

mod diagnostics;
mod hours;
mod place;
mod render;
mod view;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "placehours-viz")]
#[command(about = "Place opening-hours visualizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize one raw opening_hours value and print one line per entry.
    Hours {
        value: String,
    },

    /// Generate a popup report for a places export (validates inputs while running).
    Report {
        #[arg(long)]
        places: String,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Hours { value } => {
            for entry in hours::normalize_opening_hours(Some(&value)) {
                if entry.day.is_empty() {
                    println!("{}", entry.hours);
                } else {
                    println!("{}: {}", entry.day, entry.hours);
                }
            }
        }
        Commands::Report { places, out } => {
            // 1) Parse + validate the places export.
            let places_spec: place::PlacesSpec =
                serde_json::from_str(&std::fs::read_to_string(&places)?)?;
            let validated = places_spec.validate_and_build()?;

            // 2) Normalize hours and build popup views.
            let data = view::build_report_data(&validated);

            // 3) Render HTML.
            let html = render::render_html_report(&data)?;
            std::fs::write(&out, html)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
