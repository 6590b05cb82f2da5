use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use typedesc_to_openapi::{convert_descriptor, convert_descriptor_with_visibility, Visibility};

#[derive(Parser)]
#[command(name = "typedesc-to-openapi")]
#[command(about = "Convert runtime type descriptors to OpenAPI schema objects", long_about = None)]
struct Cli {
    /// Input type descriptor JSON file (use '-' for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Visibility stamped on the root schema (important, advanced or internal)
    #[arg(short, long, value_name = "NAME")]
    visibility: Option<Visibility>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Read input
    let input_content = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&cli.input)?
    };

    // Convert descriptor
    let schema_json = if let Some(visibility) = cli.visibility {
        convert_descriptor_with_visibility(&input_content, visibility)?
    } else {
        convert_descriptor(&input_content)?
    };

    // Write output
    if let Some(output_path) = cli.output {
        fs::write(output_path, schema_json)?;
    } else {
        println!("{}", schema_json);
    }

    Ok(())
}
